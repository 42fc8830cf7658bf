use widgetry::tools::PopupMsg;
use widgetry::{
    Choice, EventCtx, GfxCtx, HorizontalAlignment, Line, Outcome, Panel, State, TextBox, TextExt,
    VerticalAlignment, Widget,
};

use model::RunID;

use crate::{App, Transition};

/// Pick a run, type some vehicle IDs, and plot them. Any failure is shown in a popup on top of
/// this form; closing it returns here to try again.
pub struct PlotForm {
    panel: Panel,
}

impl PlotForm {
    pub fn new_state(ctx: &mut EventCtx, app: &App) -> Box<dyn State<App>> {
        // Startup refuses an empty dataset, so there's always a first run
        let runs = app.dataset.runs();
        Box::new(Self {
            panel: Panel::new_builder(Widget::col(vec![
                Line("Simplified Vehicle Plotter")
                    .small_heading()
                    .into_widget(ctx),
                Widget::row(vec![
                    "Select Run Index:".text_widget(ctx),
                    Widget::dropdown(
                        ctx,
                        "run",
                        runs[0],
                        runs.iter()
                            .map(|run| Choice::new(run.to_string(), *run))
                            .collect(),
                    ),
                ]),
                Widget::row(vec![
                    "Enter Vehicle IDs (comma-separated):".text_widget(ctx),
                    TextBox::widget(ctx, "vehicle ids", String::new(), false, 40),
                ]),
                ctx.style().btn_solid_primary.text("Plot").build_def(ctx),
            ]))
            .aligned(HorizontalAlignment::Center, VerticalAlignment::Center)
            .build(ctx),
        })
    }
}

impl State<App> for PlotForm {
    fn event(&mut self, ctx: &mut EventCtx, app: &mut App) -> Transition {
        if let Outcome::Clicked(x) = self.panel.event(ctx) {
            match x.as_ref() {
                "Plot" => {
                    let run: RunID = self.panel.dropdown_value("run");
                    let vehicles = self.panel.text_box("vehicle ids");
                    match app.plot(run, &vehicles) {
                        Ok(path) => {
                            info!("Plotted run {run}: {}", path.display());
                        }
                        Err(err) => {
                            let lines: Vec<String> =
                                err.to_string().lines().map(|l| l.to_string()).collect();
                            return Transition::Push(PopupMsg::new_state(ctx, "Error", lines));
                        }
                    }
                }
                _ => unreachable!(),
            }
        }

        Transition::Keep
    }

    fn draw(&self, g: &mut GfxCtx, _: &App) {
        self.panel.draw(g);
    }
}
