pub fn validate_name(name: &str) -> bool {
    // Non-empty after trimming surrounding whitespace
    !name.trim().is_empty()
}

pub fn validate_email(email: &str) -> bool {
    // Exactly one '@' with non-empty parts on both sides
    // Domain must contain a '.', not start or end with one, no ".."
    // No whitespace or control character anywhere
    // Deliberately weak heuristic, not RFC-5322
    let email = email.trim();

    if email.is_empty() || email.chars().filter(|&c| c == '@').count() != 1 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains("..")
    {
        return false;
    }

    email.chars().all(|c| !c.is_whitespace() && c >= ' ')
}
