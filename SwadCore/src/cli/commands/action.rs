//! CLI commands for inspecting the action table

use super::parse_action;
use crate::action::{
    ActionDescriptor, ActionId, HierarchyLevel, LegacyCode, MenuEntry, Membership, Role, Tab,
    check_permission_in, legacy_code_status, lookup_descriptor, visible_menu,
};

/// Roles allowed at each level, one line per level.
fn permission_lines(descriptor: &ActionDescriptor) -> Vec<String> {
    let mut lines = Vec::new();
    for level in HierarchyLevel::ALL {
        for membership in [Membership::Belong, Membership::DontBelong] {
            let roles: Vec<_> = descriptor
                .permissions
                .mask(level, membership)
                .roles()
                .map(Role::abbreviation)
                .collect();
            let scope = match membership {
                Membership::Belong => level.name().to_string(),
                Membership::DontBelong => format!("{} (not member)", level.name()),
            };
            let roles = if roles.is_empty() {
                "-".to_string()
            } else {
                roles.join(" ")
            };
            lines.push(format!("  {scope:<24} {roles}"));
        }
    }
    lines
}

pub fn show(action: &str, format: &str) -> anyhow::Result<()> {
    let action = parse_action(action)?;
    let descriptor = lookup_descriptor(action);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(descriptor)?);
        return Ok(());
    }

    println!("Action:  {}", descriptor.name);
    match descriptor.persisted_code() {
        Some(code) => println!("Code:    {code}"),
        None => println!("Code:    (not persisted)"),
    }
    println!("Tab:     {}", descriptor.tab);
    if let Some(parent) = descriptor.parent() {
        println!("Parent:  {parent}");
    }
    println!("Content: {}", descriptor.content.name());
    println!("Target:  {}", descriptor.target.name());
    println!(
        "Phases:  pre={} post={}",
        descriptor.phases.has_pre(),
        descriptor.phases.has_post()
    );
    println!("Permissions:");
    for line in permission_lines(descriptor) {
        println!("{line}");
    }
    Ok(())
}

pub fn list(tab: Option<Tab>, format: &str) -> anyhow::Result<()> {
    let descriptors: Vec<_> = ActionId::iter()
        .map(lookup_descriptor)
        .filter(|d| tab.is_none_or(|tab| d.tab == tab))
        .collect();

    if format == "json" {
        let output: Vec<_> = descriptors
            .iter()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "code": d.code,
                    "tab": d.tab,
                    "parent": d.parent(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for d in &descriptors {
        let code = d
            .persisted_code()
            .map_or_else(|| "-".to_string(), |code| code.to_string());
        match d.parent() {
            Some(parent) => println!("{code:>5}  {:<16} {:<12} < {parent}", d.name, d.tab.name()),
            None => println!("{code:>5}  {:<16} {}", d.name, d.tab.name()),
        }
    }
    println!("\n{} actions", descriptors.len());
    Ok(())
}

pub fn resolve(codes: &[i64], format: &str) -> anyhow::Result<()> {
    if format == "json" {
        let output: Vec<_> = codes
            .iter()
            .map(|code| {
                serde_json::json!({
                    "code": code,
                    "result": legacy_code_status(*code),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for code in codes {
        match legacy_code_status(*code) {
            LegacyCode::Live(action) => println!("{code}: {action}"),
            LegacyCode::Retired => println!("{code}: retired"),
            LegacyCode::OutOfRange => println!("{code}: out of range"),
        }
    }
    Ok(())
}

pub fn check(
    action: &str,
    role: Role,
    level: HierarchyLevel,
    membership: Membership,
) -> anyhow::Result<()> {
    let action = parse_action(action)?;
    if check_permission_in(action, level, membership, role) {
        println!("{action}: allowed for {role} at {level}");
        Ok(())
    } else {
        anyhow::bail!("{action}: not allowed for {role} at {level}")
    }
}

pub fn menu(
    tab: Tab,
    role: Role,
    level: HierarchyLevel,
    membership: Membership,
    current: Option<&str>,
    format: &str,
) -> anyhow::Result<()> {
    let current = current.map(parse_action).transpose()?.unwrap_or(ActionId::UNKNOWN);
    let entries = visible_menu(tab, level, membership, role, current);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("(no options for {role} in {tab})");
        return Ok(());
    }
    for entry in entries {
        match entry {
            MenuEntry::Separator => println!("  ----"),
            MenuEntry::Option { action, selected } => {
                let marker = if selected { '>' } else { ' ' };
                println!("{marker} {action}");
            }
        }
    }
    Ok(())
}
