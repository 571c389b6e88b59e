//! # SwadCore
//!
//! Request routing and question interchange for the SWAD learning platform.
//!
//! ## Modules
//!
//! - **action** - The compiled-in action table, persisted-code resolution,
//!   role permissions, tab menus and the two-phase dispatcher
//! - **xml** - A small tree parser and printer for the XML files users upload
//! - **question** - Test question import, validation, storage and export
//!
//! ## Quick Start
//!
//! ### Dispatching a request
//!
//! ```
//! use swadcore::prelude::*;
//!
//! let dispatcher = Dispatcher::builder()
//!     .post(ActionId::SeeCty, |ctx: &mut RequestContext| -> HandlerResult {
//!         ctx.write("<p>Countries</p>");
//!         Ok(Flow::Continue)
//!     })?
//!     .build();
//!
//! let action = resolve_legacy_code(862);
//! let ctx = RequestContext::new(Role::Guest, HierarchyLevel::System);
//! let response = dispatcher.dispatch(action, ctx);
//! assert_eq!(response.status, 200);
//! # Ok::<(), swadcore::Error>(())
//! ```
//!
//! ### Reading a question file
//!
//! ```
//! use swadcore::prelude::*;
//!
//! let root = xml::parse_str(
//!     "<test><question type=\"TF\"><tags><tag>logic</tag></tags>\
//!      <stem>True?</stem><answer>T</answer></question></test>",
//! )?;
//! let mut bank = QuestionBank::new();
//! let report = import_document(&root, &mut bank, ImportLimits::default())?;
//! assert_eq!(report.imported(), 1);
//! # Ok::<(), swadcore::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `swad` command-line binary

pub mod action;
pub mod config;
pub mod error;
pub mod html;
pub mod question;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    // Action registry and dispatch
    pub use crate::action::{
        ActionDescriptor, ActionId, ContentType, Dispatcher, DispatcherBuilder, Flow, HandlerError,
        HandlerResult, HierarchyLevel, Membership, RequestContext, Response, ResponseKind, Role, Tab,
        Upload, check_permission, check_permission_in, lookup_descriptor, resolve_legacy_code,
    };

    // XML trees
    pub use crate::xml::{self, Escape, XmlAttribute, XmlElement, XmlError, print_tree};

    // Questions
    pub use crate::question::{
        Answer, AnswerType, ImportLimits, ImportReport, Question, QuestionBank, QuestionHandlers,
        import_document,
    };

    pub use crate::config::Config;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
