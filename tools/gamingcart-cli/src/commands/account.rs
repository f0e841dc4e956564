//! Account commands.

use anyhow::{Context as _, Result};
use dialoguer::{Input, Password};
use gaming_auth::{IdentityProvider, User, MIN_PASSWORD_LENGTH};

use super::{LoginArgs, RegisterArgs};
use crate::context::Context;

/// Run the register command.
pub fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt(format!("Password (min {MIN_PASSWORD_LENGTH} characters)"))
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let user = ctx
        .shop
        .identity()
        .register(&name, &email, &password)
        .context("Registration failed")?;
    ctx.output
        .success(&format!("Welcome, {}! You are signed in.", user.display_name()));
    print_user(&user, ctx);
    Ok(())
}

/// Run the login command.
pub fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let user = ctx
        .shop
        .identity()
        .sign_in(&args.email, &password)
        .context("Sign in failed")?;
    ctx.output
        .success(&format!("Signed in as {}", user.display_name()));
    print_user(&user, ctx);
    Ok(())
}

/// Run the logout command.
pub fn logout(ctx: &Context) -> Result<()> {
    ctx.shop.identity().sign_out()?;
    ctx.output.success("Signed out");
    Ok(())
}

/// Run the whoami command.
pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.shop.identity().current_user()? {
        Some(user) => print_user(&user, ctx),
        None if ctx.output.is_json() => ctx.output.json(&serde_json::Value::Null),
        None => ctx.output.info("Not signed in."),
    }
    Ok(())
}

fn print_user(user: &User, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(user);
        return;
    }
    ctx.output.kv("Name", user.display_name());
    ctx.output.kv("Email", &user.email);
    ctx.output.kv("Role", user.role.as_str());
}
