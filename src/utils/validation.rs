use regex::Regex;

/// Checks email syntax: local part, "@", dotted domain with an alphabetic TLD.
pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid");
    re.is_match(email)
}
