//! Responses and the per-content-type wrappers

use std::borrow::Cow;
use std::fmt::Write as _;

use super::context::{Alert, AlertKind, RequestContext};
use super::dispatch::HandlerError;
use super::list::ActionId;
use super::menu::{MenuEntry, visible_menu};
use super::types::{ActionDescriptor, ContentType, Tab};
use crate::html::escape;

const MIME_HTML: &str = "text/html; charset=utf-8";
const MIME_TEXT: &str = "text/plain; charset=utf-8";

/// How the response body is meant to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Full HTML page with header, menu and footer.
    Page,
    /// Bare HTML for an AJAX refresh.
    Fragment,
    /// File download.
    File,
    /// Status line and a short plain-text message.
    Status,
    /// 204, empty body.
    NoContent,
    /// The role may not run the action here.
    NotAuthorized,
    /// The action does not exist (or no longer exists).
    UnknownAction,
    /// A handler failed.
    Error,
}

/// The result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub action: ActionId,
    pub status: u16,
    pub kind: ResponseKind,
    pub mime_type: String,
    pub file_name: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    /// Body as text, lossy for binary downloads.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn html(action: ActionId, status: u16, kind: ResponseKind, body: String) -> Self {
        Self {
            action,
            status,
            kind,
            mime_type: MIME_HTML.to_string(),
            file_name: None,
            body: body.into_bytes(),
        }
    }

    fn status_only(action: ActionId, status: u16, message: &str) -> Self {
        Self {
            action,
            status,
            kind: ResponseKind::Status,
            mime_type: MIME_TEXT.to_string(),
            file_name: None,
            body: message.as_bytes().to_vec(),
        }
    }

    pub(crate) fn unknown_action(ctx: &RequestContext) -> Self {
        let alerts = [Alert {
            kind: AlertKind::Warning,
            message: "Unknown action.".to_string(),
        }];
        let body = render_page(ActionId::UNKNOWN.descriptor(), ctx, &alerts, "");
        Self::html(ActionId::UNKNOWN, 404, ResponseKind::UnknownAction, body)
    }

    pub(crate) fn not_authorized(descriptor: &ActionDescriptor, ctx: &RequestContext) -> Self {
        let message = "You are not allowed to perform this action.";
        match descriptor.content {
            ContentType::Upload | ContentType::NoContent | ContentType::Download => {
                let mut response = Self::status_only(descriptor.id, 403, message);
                response.kind = ResponseKind::NotAuthorized;
                response
            }
            ContentType::AjaxRefresh => {
                let body = render_alerts(&[Alert {
                    kind: AlertKind::Warning,
                    message: message.to_string(),
                }]);
                Self::html(descriptor.id, 403, ResponseKind::NotAuthorized, body)
            }
            ContentType::Html | ContentType::Data => {
                let alerts = [Alert {
                    kind: AlertKind::Warning,
                    message: message.to_string(),
                }];
                let body = render_page(descriptor, ctx, &alerts, "");
                Self::html(descriptor.id, 403, ResponseKind::NotAuthorized, body)
            }
        }
    }

    pub(crate) fn handler_error(
        descriptor: &ActionDescriptor,
        ctx: RequestContext,
        err: &HandlerError,
    ) -> Self {
        let status = err.status();
        match descriptor.content {
            ContentType::Upload | ContentType::NoContent | ContentType::Download => {
                let mut response = Self::status_only(descriptor.id, status, &err.to_string());
                response.kind = ResponseKind::Error;
                response
            }
            ContentType::AjaxRefresh => {
                let (_, mut alerts) = ctx.into_parts();
                alerts.push(error_alert(err));
                Self::html(descriptor.id, status, ResponseKind::Error, render_alerts(&alerts))
            }
            ContentType::Html | ContentType::Data => {
                let mut alerts = ctx.alerts().to_vec();
                alerts.push(error_alert(err));
                let body = render_page(descriptor, &ctx, &alerts, ctx.output());
                Self::html(descriptor.id, status, ResponseKind::Error, body)
            }
        }
    }

    /// Wrap the handler output according to the action's content type.
    pub(crate) fn wrap(descriptor: &ActionDescriptor, mut ctx: RequestContext) -> Self {
        match descriptor.content {
            ContentType::Html | ContentType::Data => {
                let body = render_page(descriptor, &ctx, ctx.alerts(), ctx.output());
                Self::html(descriptor.id, 200, ResponseKind::Page, body)
            }
            ContentType::AjaxRefresh => {
                let (output, alerts) = ctx.into_parts();
                let mut body = render_alerts(&alerts);
                body.push_str(&output);
                Self::html(descriptor.id, 200, ResponseKind::Fragment, body)
            }
            ContentType::Download => match ctx.take_download() {
                Some(download) => Self {
                    action: descriptor.id,
                    status: 200,
                    kind: ResponseKind::File,
                    mime_type: download.mime_type,
                    file_name: Some(download.file_name),
                    body: download.bytes,
                },
                None => Self::status_only(descriptor.id, 404, "File not found."),
            },
            ContentType::Upload => {
                // Upload widgets only look at the status; errors carry their text
                let failure = ctx
                    .alerts()
                    .iter()
                    .find(|alert| alert.kind == AlertKind::Error)
                    .map(|alert| alert.message.clone());
                match failure {
                    Some(message) => Self::status_only(descriptor.id, 501, &message),
                    None => Self::status_only(descriptor.id, 200, ""),
                }
            }
            ContentType::NoContent => Self {
                action: descriptor.id,
                status: 204,
                kind: ResponseKind::NoContent,
                mime_type: MIME_TEXT.to_string(),
                file_name: None,
                body: Vec::new(),
            },
        }
    }
}

fn error_alert(err: &HandlerError) -> Alert {
    Alert {
        kind: AlertKind::Error,
        message: err.to_string(),
    }
}

fn render_alerts(alerts: &[Alert]) -> String {
    let mut html = String::new();
    for alert in alerts {
        let _ = write!(
            html,
            "<div class=\"{}\">{}</div>",
            alert.kind.css_class(),
            escape(&alert.message)
        );
    }
    html
}

fn render_menu(descriptor: &ActionDescriptor, ctx: &RequestContext) -> String {
    if descriptor.tab == Tab::Unknown {
        return String::new();
    }
    let entries = visible_menu(descriptor.tab, ctx.level, ctx.membership, ctx.role, descriptor.id);
    let mut html = String::from("<ul id=\"menu\">");
    for entry in entries {
        match entry {
            MenuEntry::Separator => html.push_str("<li><hr /></li>"),
            MenuEntry::Option { action, selected } => {
                let option = action.descriptor();
                let _ = write!(
                    html,
                    "<li class=\"{}\"><a href=\"?act={}\">{}</a></li>",
                    if selected { "MENU_ON" } else { "MENU_OFF" },
                    option.code,
                    option.name
                );
            }
        }
    }
    html.push_str("</ul>");
    html
}

fn render_page(
    descriptor: &ActionDescriptor,
    ctx: &RequestContext,
    alerts: &[Alert],
    output: &str,
) -> String {
    let mut html = String::with_capacity(output.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\" />\n");
    let _ = writeln!(html, "<title>SWAD - {}</title>", descriptor.tab);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<nav id=\"tab\" data-tab=\"{}\">{}</nav>", descriptor.tab, render_menu(descriptor, ctx));
    let _ = writeln!(html, "<main id=\"{}\">", descriptor.name);
    html.push_str(&render_alerts(alerts));
    html.push_str(output);
    html.push_str("\n</main>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{HierarchyLevel, Role};

    #[test]
    fn test_page_contains_menu_and_output() {
        let mut ctx = RequestContext::new(Role::Teacher, HierarchyLevel::Course);
        ctx.set_action(ActionId::ReqTst);
        ctx.write("<form></form>");
        let response = Response::wrap(ActionId::ReqTst.descriptor(), ctx);
        let text = response.text();
        assert_eq!(response.kind, ResponseKind::Page);
        assert!(text.contains("<main id=\"ReqTst\">"));
        assert!(text.contains("<form></form>"));
        assert!(text.contains("<li class=\"MENU_ON\"><a href=\"?act=103\">ReqTst</a></li>"));
    }

    #[test]
    fn test_ajax_refresh_is_bare_fragment() {
        let mut ctx = RequestContext::new(Role::Student, HierarchyLevel::Course);
        ctx.write("<span>3 connected</span>");
        let response = Response::wrap(ActionId::RefCon.descriptor(), ctx);
        assert_eq!(response.kind, ResponseKind::Fragment);
        assert_eq!(response.text(), "<span>3 connected</span>");
    }

    #[test]
    fn test_upload_reports_status_only() {
        let ctx = RequestContext::new(Role::InstitutionAdmin, HierarchyLevel::Institution);
        let ok = Response::wrap(ActionId::RcvFilDocInsDZ.descriptor(), ctx);
        assert_eq!((ok.status, ok.kind), (200, ResponseKind::Status));
        assert!(ok.body.is_empty());

        let mut ctx = RequestContext::new(Role::InstitutionAdmin, HierarchyLevel::Institution);
        ctx.alert(AlertKind::Error, "Quota exceeded.");
        let failed = Response::wrap(ActionId::RcvFilDocInsDZ.descriptor(), ctx);
        assert_eq!(failed.status, 501);
        assert_eq!(failed.text(), "Quota exceeded.");
    }

    #[test]
    fn test_missing_download_is_not_found() {
        let ctx = RequestContext::new(Role::Guest, HierarchyLevel::Degree);
        let response = Response::wrap(ActionId::DowSeeDocDeg.descriptor(), ctx);
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_alert_text_is_escaped() {
        let html = render_alerts(&[Alert {
            kind: AlertKind::Error,
            message: "Expect end tag </a>.".to_string(),
        }]);
        assert_eq!(html, "<div class=\"ALERT_ERROR\">Expect end tag &lt;/a&gt;.</div>");
    }
}
