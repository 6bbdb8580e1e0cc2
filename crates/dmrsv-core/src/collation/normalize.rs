/// Fold a title the way the game does before comparing.
///
/// Apostrophes and hyphens are dropped, `ö` becomes `o`, and everything is
/// uppercased with the full Unicode mapping.
pub fn normalize_title(title: &str) -> String {
    let mut folded = String::with_capacity(title.len());
    for ch in title.chars() {
        match ch {
            '\'' | '-' => {}
            'ö' => folded.push('O'),
            _ => folded.extend(ch.to_uppercase()),
        }
    }
    folded
}
