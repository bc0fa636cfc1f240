//! Easel: a drag-and-drop canvas editor
//!
//! Drag text, image and button elements from the palette onto the canvas,
//! drop image files or paste text onto it, arrange elements by dragging
//! them, and submit the result.

use anyhow::Result;
use api::{LogSubmitter, Submission, Submitter};
use canvas::{Canvas, CanvasEvent};
use clap::Parser;
use gpui::{
    actions, div, point, prelude::*, px, size, App, Application, Bounds, Entity, FocusHandle,
    Focusable, IntoElement, KeyBinding, Menu, MenuItem, Subscription, TitlebarOptions, Window,
    WindowBounds, WindowOptions,
};
use theme::Theme;
use ui::{button, h_stack, v_stack, Palette};

use crate::assets::Assets;
use crate::config::Config;
use crate::logger::EaselLogger;

mod assets;
mod config;
mod logger;

actions!(easel, [Paste, Quit, Submit]);

/// Main application component
struct Easel {
    canvas: Entity<Canvas>,
    palette: Entity<Palette>,
    focus_handle: FocusHandle,
    theme: Theme,
    submitter: Box<dyn Submitter>,
    _subscriptions: Vec<Subscription>,
}

impl Easel {
    pub fn new(
        config: &Config,
        submitter: Box<dyn Submitter>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let theme = Theme::for_appearance(config.theme);
        let focus_handle = cx.focus_handle();
        let canvas = cx.new(|_| Canvas::new(theme.clone()).with_height(config.canvas_height));
        let palette = cx.new(|cx| Palette::new(canvas.clone(), theme.clone(), cx));

        let canvas_subscription = cx.subscribe(&canvas, Self::handle_canvas_event);

        Easel {
            canvas,
            palette,
            focus_handle,
            theme,
            submitter,
            _subscriptions: vec![canvas_subscription],
        }
    }

    fn handle_canvas_event(
        &mut self,
        canvas: Entity<Canvas>,
        event: &CanvasEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            CanvasEvent::ElementAdded(id) => {
                let canvas = canvas.read(cx);
                if let Some(element) = canvas.state().registry().get(*id) {
                    log::info!(
                        "Added {} element {} at ({}, {})",
                        element.kind(),
                        id,
                        element.position.x,
                        element.position.y
                    );
                }
            }
            CanvasEvent::DragEnded(id) => {
                if let Some(element) = canvas.read(cx).state().registry().get(*id) {
                    log::debug!(
                        "Element {} placed at ({}, {})",
                        id,
                        element.position.x,
                        element.position.y
                    );
                }
            }
            CanvasEvent::DropIgnored(_)
            | CanvasEvent::DragStarted(_)
            | CanvasEvent::ElementMoved(_) => {}
        }
    }

    fn submit(&mut self, _: &Submit, _window: &mut Window, cx: &mut Context<Self>) {
        self.submit_elements(cx);
    }

    fn submit_elements(&mut self, cx: &mut Context<Self>) {
        let submission = Submission::new(self.canvas.read(cx).elements());
        if let Err(err) = self.submitter.submit(&submission) {
            log::error!("Submit failed: {err}");
        }
    }

    fn paste(&mut self, _: &Paste, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) else {
            return;
        };
        self.canvas.update(cx, |canvas, cx| canvas.paste_text(text, cx));
    }
}

impl Render for Easel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_stack()
            .id("Easel")
            .key_context("easel")
            .track_focus(&self.focus_handle)
            .size_full()
            .gap(px(16.0))
            .p(px(16.0))
            .pt(px(36.0)) // Space for traffic lights
            .text_sm()
            .bg(self.theme.ui_background)
            .text_color(self.theme.ui_text)
            .on_action(cx.listener(Self::submit))
            .on_action(cx.listener(Self::paste))
            .child(div().text_xl().child("Easel"))
            .child(self.palette.clone())
            .child(self.canvas.clone())
            .child(
                h_stack().justify_end().child(
                    button("submit", "Submit", self.theme.accent, gpui::white()).on_click(
                        cx.listener(|this, _, _window, cx| this.submit_elements(cx)),
                    ),
                ),
            )
    }
}

impl Focusable for Easel {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("cmd-enter", Submit, None),
        KeyBinding::new("cmd-v", Paste, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);
}

fn open_main_window(config: &Config, cx: &mut App) -> Result<()> {
    let bounds = Bounds::centered(None, size(px(960.0), px(640.0)), cx);
    let window = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Easel".into()),
                appears_transparent: true,
                traffic_light_position: Some(point(px(8.0), px(8.0))),
            }),
            ..Default::default()
        },
        |window, cx| cx.new(|cx| Easel::new(config, Box::new(LogSubmitter), window, cx)),
    )?;

    window.update(cx, |view, window, cx| {
        window.focus(&view.focus_handle(cx));
        cx.activate(true);
    })?;
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    EaselLogger::init(config.log_level, !config.no_log_file)?;

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        cx.on_action(quit);

        cx.set_menus(vec![
            Menu {
                name: "Easel".into(),
                items: vec![MenuItem::action("Quit", Quit)],
            },
            Menu {
                name: "Edit".into(),
                items: vec![
                    MenuItem::action("Paste", Paste),
                    MenuItem::separator(),
                    MenuItem::action("Submit", Submit),
                ],
            },
        ]);

        init_keymap(cx);

        if let Err(err) = open_main_window(&config, cx) {
            log::error!("Failed to open window: {err:#}");
            cx.quit();
        }
    });

    Ok(())
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}
