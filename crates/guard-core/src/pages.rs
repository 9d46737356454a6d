//! Page components

use crate::navbar::ToggleButton;
use crate::render::{Page, RenderCtx, Renderable, View};

pub const HOME_TEXT: &str = "Welcome to Home Page";
pub const PROFILE_TEXT: &str = "Profile";
pub const SETTING_TEXT: &str = "Settings Page";
pub const NOT_FOUND_TEXT: &str = "404 - Page not found";

fn page(content: &'static str, toggle: Option<ToggleButton>, cx: &RenderCtx<'_>) -> View {
    View::Page(Page {
        content,
        toggle,
        props: cx.props.clone(),
    })
}

/// Landing page; may carry its own login toggle
#[derive(Debug, Clone, Copy)]
pub struct Home {
    show_toggle: bool,
}

impl Home {
    pub fn new(show_toggle: bool) -> Self {
        Self { show_toggle }
    }
}

impl Renderable for Home {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View {
        let toggle = self.show_toggle.then(|| ToggleButton::for_session(cx.session));
        page(HOME_TEXT, toggle, cx)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Profile;

impl Renderable for Profile {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View {
        page(PROFILE_TEXT, None, cx)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Setting;

impl Renderable for Setting {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View {
        page(SETTING_TEXT, None, cx)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotFound;

impl Renderable for NotFound {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View {
        page(NOT_FOUND_TEXT, None, cx)
    }
}
