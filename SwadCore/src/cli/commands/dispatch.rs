//! CLI command for simulating a request

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::parse_action;
use super::question::bank_path;
use crate::action::{Dispatcher, HierarchyLevel, Membership, RequestContext, Role, Upload};
use crate::config::Config;
use crate::question::{QuestionBank, QuestionHandlers};

/// Who is asking for what.
pub struct Request<'a> {
    pub action: &'a str,
    pub role: Role,
    pub level: HierarchyLevel,
    pub membership: Membership,
    pub params: &'a [(String, String)],
    pub upload: Option<&'a Path>,
    pub mime: &'a str,
}

pub fn execute(
    config: &Config,
    request: &Request<'_>,
    bank: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let action = parse_action(request.action)?;

    let bank_path = bank_path(config, bank)?;
    let bank = Arc::new(Mutex::new(QuestionBank::load(&bank_path)?));
    let handlers = Arc::new(QuestionHandlers::new(bank, config)?.with_bank_path(bank_path));
    let dispatcher: Dispatcher = handlers.register(Dispatcher::builder())?.build();

    let mut ctx = RequestContext::new(request.role, request.level).with_membership(request.membership);
    for (name, value) in request.params {
        ctx = ctx.with_param(name.as_str(), value.as_str());
    }
    if let Some(path) = request.upload {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());
        ctx = ctx.with_upload(Upload::new(file_name, request.mime, bytes));
    }

    tracing::debug!("dispatching {action} as {} at {}", request.role, request.level);
    let response = dispatcher.dispatch(action, ctx);

    eprintln!("{} {} ({:?})", response.status, response.action, response.kind);
    match output {
        Some(path) => {
            fs::write(path, &response.body)?;
            eprintln!("wrote {} bytes to {}", response.body.len(), path.display());
        }
        None => print!("{}", response.text()),
    }

    if !response.is_success() {
        anyhow::bail!("request failed with status {}", response.status);
    }
    Ok(())
}
