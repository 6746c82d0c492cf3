use crate::{config::CommandGate, error::command::CommandError};

use super::parser::Command;

/// Whether any of a member's roles is a manager role.
pub fn is_manager(member_roles: &[u64], manager_role_ids: &[u64]) -> bool {
    member_roles.iter().any(|role| manager_role_ids.contains(role))
}

/// Decides whether a member may run a command.
///
/// Checked in order: vacation mode (everything but the help listing is
/// paused), test mode (managers only), then the command's own manager
/// requirement.
///
/// # Arguments
/// - `gate` - Maintenance switches
/// - `command` - Parsed command
/// - `manager_role_ids` - Configured manager roles
/// - `member_roles` - Roles of the invoking member
///
/// # Returns
/// - `Ok(())` - Command may run
/// - `Err(CommandError)` - Reply explaining why it may not
pub fn admit(
    gate: &CommandGate,
    command: &Command,
    manager_role_ids: &[u64],
    member_roles: &[u64],
) -> Result<(), CommandError> {
    if *command == Command::Help {
        return Ok(());
    }
    if gate.vacation_mode {
        return Err(CommandError::Vacation);
    }

    let manager = is_manager(member_roles, manager_role_ids);
    if gate.test_mode && !manager {
        return Err(CommandError::TestMode);
    }

    if command.requires_manager() && !manager {
        if manager_role_ids.is_empty() {
            return Err(CommandError::NotConfigured {
                command: command.name(),
                missing: "MANAGER_ROLE_IDS".to_string(),
            });
        }
        return Err(CommandError::PermissionDenied(command.name()));
    }

    Ok(())
}
