//! Account administration commands.

use anyhow::{anyhow, Context as _, Result};
use gaming_auth::{require_role, IdentityProvider, Role};

use super::{UsersArgs, UsersCommand};
use crate::context::Context;

/// Run the users command. Admins only.
pub fn run(args: UsersArgs, ctx: &Context) -> Result<()> {
    let identity = ctx.shop.identity();
    let current = identity.current_user()?;
    require_role(current.as_ref(), &[Role::Admin]).context("Admin access required")?;

    match args.command {
        Some(UsersCommand::List) | None => {
            let users = identity.users()?;
            if ctx.output.is_json() {
                ctx.output.json(&users);
                return Ok(());
            }

            ctx.output.header(&format!("Users ({})", users.len()));
            let widths = [24, 32, 10];
            ctx.output.table_row(&["NAME", "EMAIL", "ROLE"], &widths);
            for user in &users {
                ctx.output.table_row(
                    &[user.display_name(), &user.email, user.role.as_str()],
                    &widths,
                );
            }
            Ok(())
        }
        Some(UsersCommand::SetRole { email, role }) => {
            let role: Role = role.parse().map_err(|e: String| anyhow!(e))?;
            let user = identity.set_role(&email, role)?;
            if ctx.output.is_json() {
                ctx.output.json(&user);
            } else {
                ctx.output
                    .success(&format!("{} is now {}", user.email, user.role));
            }
            Ok(())
        }
    }
}
