//! Two-phase request dispatch
//!
//! Handlers are attached to table slots once, at startup, through
//! [`DispatcherBuilder`]. The resulting [`Dispatcher`] is immutable and can be
//! shared between request threads behind an `Arc`.

use thiserror::Error;

use super::context::RequestContext;
use super::list::ActionId;
use super::permission::check_permission_in;
use super::response::Response;
use crate::error::{Error, Result};

/// What the dispatcher does after a pre-handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Skip the post phase and wrap whatever has been written so far.
    Abort,
}

/// A handler failure, shown to the user as an error message box.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("missing parameter \"{0}\"")]
    MissingParameter(String),

    #[error("invalid value \"{value}\" for parameter \"{name}\"")]
    InvalidParameter { name: String, value: String },

    /// A user-facing refusal with its own message.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Core(#[from] Error),
}

impl HandlerError {
    /// HTTP status reported for this failure.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            HandlerError::Core(Error::Io(_)) => 500,
            _ => 400,
        }
    }
}

pub type HandlerResult = std::result::Result<Flow, HandlerError>;

/// One phase of an action.
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: &mut RequestContext) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&mut RequestContext) -> HandlerResult + Send + Sync,
{
    fn handle(&self, ctx: &mut RequestContext) -> HandlerResult {
        self(ctx)
    }
}

#[derive(Default)]
struct Slot {
    pre: Option<Box<dyn Handler>>,
    post: Option<Box<dyn Handler>>,
}

/// Collects handlers before freezing them into a [`Dispatcher`].
pub struct DispatcherBuilder {
    slots: Vec<Slot>,
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherBuilder {
    #[must_use]
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(ActionId::COUNT);
        slots.resize_with(ActionId::COUNT, Slot::default);
        Self { slots }
    }

    /// Attach the parameter-gathering phase of `action`.
    pub fn pre<H: Handler + 'static>(mut self, action: ActionId, handler: H) -> Result<Self> {
        let descriptor = action.descriptor();
        if !descriptor.phases.has_pre() {
            return Err(Error::UndeclaredPhase {
                action: descriptor.name,
                phase: "pre",
            });
        }
        let slot = &mut self.slots[action.index()];
        if slot.pre.is_some() {
            return Err(Error::DuplicateHandler {
                action: descriptor.name,
                phase: "pre",
            });
        }
        slot.pre = Some(Box::new(handler));
        Ok(self)
    }

    /// Attach the effect/rendering phase of `action`.
    pub fn post<H: Handler + 'static>(mut self, action: ActionId, handler: H) -> Result<Self> {
        let descriptor = action.descriptor();
        if !descriptor.phases.has_post() {
            return Err(Error::UndeclaredPhase {
                action: descriptor.name,
                phase: "post",
            });
        }
        let slot = &mut self.slots[action.index()];
        if slot.post.is_some() {
            return Err(Error::DuplicateHandler {
                action: descriptor.name,
                phase: "post",
            });
        }
        slot.post = Some(Box::new(handler));
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Dispatcher {
        let registered = self
            .slots
            .iter()
            .filter(|slot| slot.pre.is_some() || slot.post.is_some())
            .count();
        tracing::debug!("dispatcher built with handlers for {} actions", registered);
        Dispatcher { slots: self.slots }
    }
}

/// Routes requests to their handlers.
pub struct Dispatcher {
    slots: Vec<Slot>,
}

impl Dispatcher {
    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Whether any handler is attached to `action`.
    #[must_use]
    pub fn is_handled(&self, action: ActionId) -> bool {
        let slot = &self.slots[action.index()];
        slot.pre.is_some() || slot.post.is_some()
    }

    /// Serve one request.
    ///
    /// Never fails: unknown actions, permission denials and handler errors
    /// all become ordinary responses.
    pub fn dispatch(&self, action: ActionId, mut ctx: RequestContext) -> Response {
        let descriptor = action.descriptor();
        ctx.set_action(action);

        if action.is_unknown() {
            tracing::info!("unknown action requested");
            return Response::unknown_action(&ctx);
        }

        if !check_permission_in(action, ctx.level, ctx.membership, ctx.role) {
            tracing::info!(
                "denied {} to {} at {} ({:?})",
                descriptor.name,
                ctx.role,
                ctx.level,
                ctx.membership
            );
            return Response::not_authorized(descriptor, &ctx);
        }

        let slot = &self.slots[action.index()];

        if let Some(pre) = &slot.pre {
            match pre.handle(&mut ctx) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Abort) => {
                    tracing::debug!("{} aborted in pre phase", descriptor.name);
                    return Response::wrap(descriptor, ctx);
                }
                Err(err) => {
                    tracing::warn!("{} pre phase failed: {}", descriptor.name, err);
                    return Response::handler_error(descriptor, ctx, &err);
                }
            }
        }

        if let Some(post) = &slot.post {
            if let Err(err) = post.handle(&mut ctx) {
                tracing::warn!("{} post phase failed: {}", descriptor.name, err);
                return Response::handler_error(descriptor, ctx, &err);
            }
        }

        tracing::debug!("dispatched {}", descriptor.name);
        Response::wrap(descriptor, ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::action::context::{AlertKind, Download};
    use crate::action::response::ResponseKind;
    use crate::action::{HierarchyLevel, Role};

    fn teacher() -> RequestContext {
        RequestContext::new(Role::Teacher, HierarchyLevel::Course)
    }

    #[test]
    fn test_pre_then_post() {
        let dispatcher = Dispatcher::builder()
            .pre(ActionId::SysSch, |ctx: &mut RequestContext| -> HandlerResult {
                let query = ctx.require_param("Search")?.to_uppercase();
                ctx.set_param("Normalized", query);
                Ok(Flow::Continue)
            })
            .unwrap()
            .post(ActionId::SysSch, |ctx: &mut RequestContext| -> HandlerResult {
                let line = format!("<p>{}</p>", ctx.param("Normalized").unwrap_or_default());
                ctx.write(&line);
                Ok(Flow::Continue)
            })
            .unwrap()
            .build();

        let response = dispatcher.dispatch(
            ActionId::SysSch,
            RequestContext::new(Role::Guest, HierarchyLevel::System).with_param("Search", "swad"),
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.kind, ResponseKind::Page);
        assert!(response.text().contains("<p>SWAD</p>"));
    }

    #[test]
    fn test_abort_skips_post() {
        let posts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&posts);
        let dispatcher = Dispatcher::builder()
            .pre(ActionId::SysSch, |ctx: &mut RequestContext| -> HandlerResult {
                ctx.alert(AlertKind::Warning, "Type at least one word");
                Ok(Flow::Abort)
            })
            .unwrap()
            .post(ActionId::SysSch, move |_ctx: &mut RequestContext| -> HandlerResult {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Flow::Continue)
            })
            .unwrap()
            .build();

        let response = dispatcher.dispatch(ActionId::SysSch, teacher());
        assert_eq!(posts.load(Ordering::SeqCst), 0);
        assert!(response.text().contains("Type at least one word"));
    }

    #[test]
    fn test_denied_never_runs_handlers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let dispatcher = Dispatcher::builder()
            .post(ActionId::EdiTstQst, move |_ctx: &mut RequestContext| -> HandlerResult {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Flow::Continue)
            })
            .unwrap()
            .build();

        let response = dispatcher.dispatch(
            ActionId::EdiTstQst,
            RequestContext::new(Role::Student, HierarchyLevel::Course),
        );
        assert_eq!(response.kind, ResponseKind::NotAuthorized);
        assert_eq!(response.status, 403);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_action_page() {
        let dispatcher = Dispatcher::builder().build();
        let response = dispatcher.dispatch(ActionId::Unk, teacher());
        assert_eq!(response.kind, ResponseKind::UnknownAction);
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_handler_error_becomes_message_box() {
        let dispatcher = Dispatcher::builder()
            .pre(ActionId::SysSch, |ctx: &mut RequestContext| -> HandlerResult {
                ctx.require_param("Search")?;
                Ok(Flow::Continue)
            })
            .unwrap()
            .build();
        let response = dispatcher.dispatch(ActionId::SysSch, teacher());
        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(response.status, 400);
        assert!(response.text().contains("missing parameter &quot;Search&quot;"));
    }

    #[test]
    fn test_download_wrapper() {
        let dispatcher = Dispatcher::builder()
            .pre(ActionId::DowSeeDocDeg, |ctx: &mut RequestContext| -> HandlerResult {
                ctx.set_download(Download {
                    file_name: "syllabus.pdf".to_string(),
                    mime_type: "application/pdf".to_string(),
                    bytes: b"%PDF-1.4".to_vec(),
                });
                Ok(Flow::Continue)
            })
            .unwrap()
            .build();
        let response = dispatcher.dispatch(
            ActionId::DowSeeDocDeg,
            RequestContext::new(Role::Guest, HierarchyLevel::Degree),
        );
        assert_eq!(response.kind, ResponseKind::File);
        assert_eq!(response.mime_type, "application/pdf");
        assert_eq!(response.file_name.as_deref(), Some("syllabus.pdf"));
        assert_eq!(response.body, b"%PDF-1.4");
    }

    #[test]
    fn test_rejects_undeclared_phase() {
        // Importing questions only declares a post phase
        let result = Dispatcher::builder()
            .pre(ActionId::ImpTstQst, |_ctx: &mut RequestContext| -> HandlerResult { Ok(Flow::Continue) });
        assert!(matches!(result, Err(Error::UndeclaredPhase { phase: "pre", .. })));
    }

    #[test]
    fn test_rejects_duplicate_handler() {
        let result = Dispatcher::builder()
            .post(ActionId::SeeCty, |_ctx: &mut RequestContext| -> HandlerResult { Ok(Flow::Continue) })
            .unwrap()
            .post(ActionId::SeeCty, |_ctx: &mut RequestContext| -> HandlerResult { Ok(Flow::Continue) });
        assert!(matches!(result, Err(Error::DuplicateHandler { .. })));
    }

    #[test]
    fn test_dispatcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dispatcher>();
    }
}
