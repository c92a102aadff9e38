use crate::types::model::EditAuthor;

/// Decides whether a bonus-sheet handle refers to the author of an edit.
///
/// The sheet and the edit history do not share a join key, so this walks a
/// best-effort fallback chain, first hit wins:
///
/// 1. the handle is the author's stable user key;
/// 2. the author's email local-part equals or starts with the handle;
/// 3. the display name contains the handle, case-insensitively;
/// 4. first initial + last name derived from the display name equals the
///    handle;
/// 5. the display name with spaces removed equals the handle.
///
/// A miss is silent and simply leaves the edit without the bonus. False
/// positives on common surnames are possible; see DESIGN.md.
pub fn handle_matches_author(handle: &str, author: &EditAuthor) -> bool {
    let handle = handle.trim();
    if handle.is_empty() {
        return false;
    }

    if author.user_key == handle {
        return true;
    }

    let handle_lower = handle.to_lowercase();

    if let Some(email) = author.email.as_deref() {
        let local_part = email.split('@').next().unwrap_or("").to_lowercase();
        if !local_part.is_empty()
            && (local_part == handle_lower || local_part.starts_with(&handle_lower))
        {
            return true;
        }
    }

    let name_lower = author.display_name.to_lowercase();
    if name_lower.contains(&handle_lower) {
        return true;
    }

    let parts: Vec<&str> = author.display_name.split_whitespace().collect();
    if parts.len() >= 2 {
        if let Some(initial) = parts[0].chars().next() {
            let derived = format!("{}{}", initial, parts[parts.len() - 1]).to_lowercase();
            if derived == handle_lower {
                return true;
            }
        }
    }

    let squashed: String = parts.concat().to_lowercase();
    squashed == handle_lower
}
