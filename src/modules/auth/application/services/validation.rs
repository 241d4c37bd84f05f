use regex::Regex;
use std::sync::OnceLock;

pub const USERNAME_MAX_CHARS: usize = 50;
pub const ABOUT_ME_MAX_CHARS: usize = 300;
pub const PASSWORD_MIN_CHARS: usize = 8;

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username regex is valid"))
}

/// Usernames are URL path segments; keep them to word characters.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if username.chars().count() > USERNAME_MAX_CHARS {
        return Err(format!(
            "Username must be at most {} characters",
            USERNAME_MAX_CHARS
        ));
    }
    if !username_regex().is_match(username) {
        return Err("Username may only contain letters, digits and underscores".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !email_address::EmailAddress::is_valid(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_CHARS
        ));
    }
    Ok(())
}

pub fn validate_about_me(about_me: &str) -> Result<(), String> {
    if about_me.chars().count() > ABOUT_ME_MAX_CHARS {
        return Err(format!(
            "Bio must be at most {} characters",
            ABOUT_ME_MAX_CHARS
        ));
    }
    Ok(())
}
