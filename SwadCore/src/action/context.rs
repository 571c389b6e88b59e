//! Per-request state passed through the handlers

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::dispatch::HandlerError;
use super::list::ActionId;
use super::types::{HierarchyLevel, Membership, Role};

/// A file received with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// A file to send back for download actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Severity of a user-facing message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            AlertKind::Info => "ALERT_INFO",
            AlertKind::Success => "ALERT_SUCCESS",
            AlertKind::Warning => "ALERT_WARNING",
            AlertKind::Error => "ALERT_ERROR",
        }
    }
}

/// A message box shown above the handler output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Everything a handler may read or write while serving one request.
///
/// Built by the caller, then owned by the dispatcher for the duration of the
/// request. Nothing in here is shared between requests.
pub struct RequestContext {
    action: ActionId,
    pub role: Role,
    pub level: HierarchyLevel,
    pub membership: Membership,
    params: IndexMap<String, String>,
    upload: Option<Upload>,
    output: String,
    download: Option<Download>,
    alerts: Vec<Alert>,
    extensions: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl RequestContext {
    #[must_use]
    pub fn new(role: Role, level: HierarchyLevel) -> Self {
        Self {
            action: ActionId::UNKNOWN,
            role,
            level,
            membership: Membership::Belong,
            params: IndexMap::new(),
            upload: None,
            output: String::new(),
            download: None,
            alerts: Vec::new(),
            extensions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.upload = Some(upload);
        self
    }

    /// The action being served. Set by the dispatcher.
    #[must_use]
    pub fn action(&self) -> ActionId {
        self.action
    }

    pub(crate) fn set_action(&mut self, action: ActionId) {
        self.action = action;
    }

    // ==================== Parameters ====================

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn require_param(&self, name: &str) -> Result<&str, HandlerError> {
        self.param(name)
            .ok_or_else(|| HandlerError::MissingParameter(name.to_string()))
    }

    /// Interpret a `Y`/`N` flag parameter. Absent means `false`.
    #[must_use]
    pub fn param_flag(&self, name: &str) -> bool {
        self.param(name)
            .is_some_and(|value| value.eq_ignore_ascii_case("Y"))
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    // ==================== Files ====================

    #[must_use]
    pub fn upload(&self) -> Option<&Upload> {
        self.upload.as_ref()
    }

    pub fn take_upload(&mut self) -> Option<Upload> {
        self.upload.take()
    }

    pub fn set_download(&mut self, download: Download) {
        self.download = Some(download);
    }

    pub(crate) fn take_download(&mut self) -> Option<Download> {
        self.download.take()
    }

    // ==================== Output ====================

    /// Append HTML to the handler output.
    pub fn write(&mut self, html: &str) {
        self.output.push_str(html);
    }

    pub fn output_mut(&mut self) -> &mut String {
        &mut self.output
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alerts.push(Alert {
            kind,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.alerts.iter().any(|alert| alert.kind == AlertKind::Error)
    }

    // ==================== Extensions ====================

    /// Store a value for a later phase. Replaces any value of the same type.
    pub fn insert<T: Any + Send>(&mut self, value: T) -> Option<T> {
        self.extensions
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    #[must_use]
    pub fn get<T: Any + Send>(&self) -> Option<&T> {
        self.extensions
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn remove<T: Any + Send>(&mut self) -> Option<T> {
        self.extensions
            .remove(&TypeId::of::<T>())
            .and_then(|value| value.downcast::<T>().ok())
            .map(|value| *value)
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Alert>) {
        (self.output, self.alerts)
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("action", &self.action)
            .field("role", &self.role)
            .field("level", &self.level)
            .field("membership", &self.membership)
            .field("params", &self.params)
            .field("upload", &self.upload.as_ref().map(|u| &u.file_name))
            .field("output_len", &self.output.len())
            .field("alerts", &self.alerts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct SearchScope(&'static str);

    #[test]
    fn test_params_keep_order() {
        let ctx = RequestContext::new(Role::Student, HierarchyLevel::Course)
            .with_param("b", "2")
            .with_param("a", "1");
        let names: Vec<_> = ctx.params().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(ctx.param("a"), Some("1"));
        assert!(ctx.require_param("c").is_err());
    }

    #[test]
    fn test_param_flag() {
        let ctx = RequestContext::new(Role::Teacher, HierarchyLevel::Course)
            .with_param("CreateXML", "Y")
            .with_param("OnlyThisQst", "N");
        assert!(ctx.param_flag("CreateXML"));
        assert!(!ctx.param_flag("OnlyThisQst"));
        assert!(!ctx.param_flag("Missing"));
    }

    #[test]
    fn test_extensions() {
        let mut ctx = RequestContext::new(Role::Guest, HierarchyLevel::System);
        assert!(ctx.insert(SearchScope("degrees")).is_none());
        assert_eq!(ctx.get::<SearchScope>(), Some(&SearchScope("degrees")));
        assert_eq!(ctx.insert(SearchScope("courses")), Some(SearchScope("degrees")));
        assert_eq!(ctx.remove::<SearchScope>(), Some(SearchScope("courses")));
        assert!(ctx.get::<SearchScope>().is_none());
    }

    #[test]
    fn test_alerts() {
        let mut ctx = RequestContext::new(Role::Guest, HierarchyLevel::System);
        ctx.alert(AlertKind::Info, "hello");
        assert!(!ctx.has_errors());
        ctx.alert(AlertKind::Error, "boom");
        assert!(ctx.has_errors());
        assert_eq!(ctx.alerts().len(), 2);
    }
}
