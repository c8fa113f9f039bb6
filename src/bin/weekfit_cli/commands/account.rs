// ABOUTME: Account commands for the weekfit CLI
// ABOUTME: Handles login, registration, logout and showing the signed-in user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use weekfit::auth::{LoginForm, SignupForm};
use weekfit::errors::AppResult;

use crate::helpers::display::display_user;
use crate::Manager;

/// Log in and persist the session token
pub async fn login(manager: &Manager, email: String, password: String) -> AppResult<()> {
    let session = manager.login(&LoginForm::new(email, password)).await?;
    println!("Welcome back, {}!", session.user().name);
    Ok(())
}

/// Create an account and log in
pub async fn register(
    manager: &Manager,
    name: String,
    email: String,
    password: String,
    confirm_password: Option<String>,
) -> AppResult<()> {
    let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
    let form = SignupForm {
        name,
        email,
        password,
        confirm_password,
    };
    let session = manager.register(&form).await?;
    println!("Account created. Welcome, {}!", session.user().name);
    Ok(())
}

/// Forget the stored token
pub fn logout(manager: &Manager) -> AppResult<()> {
    manager.forget()?;
    info!("Stored token removed");
    println!("Signed out.");
    Ok(())
}

/// Show the signed-in user
pub async fn whoami(manager: &Manager) -> AppResult<()> {
    let session = manager.restore().await?;
    display_user(session.user());
    Ok(())
}
