//! The `Renderable` seam shared by pages and the guard decorator

use crate::history::History;
use crate::navbar::ToggleButton;
use crate::route::{Props, Route};
use crate::session::Session;

/// Everything a component may read or touch during one render pass
pub struct RenderCtx<'a> {
    pub session: &'a Session,
    pub history: &'a mut History,
    pub props: &'a Props,
}

/// Output of rendering a page component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub content: &'static str,
    pub toggle: Option<ToggleButton>,
    pub props: Props,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Page(Page),
    /// History was rewritten to the route; the shell must render again
    Redirect(Route),
}

pub trait Renderable {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View {
        (**self).render(cx)
    }
}
