use std::path::Path;

pub const BANNER_WIDTH: usize = 80;

fn fill(ch: &str, len: usize) -> String {
    ch.chars().cycle().take(len).collect()
}

/// Returns a banner line of `length` characters with `text` centered in it.
///
/// `ch` may be a single character or a short pattern, which is repeated and cut to
/// fit. Text too long to leave room for at least one fill character on each side is
/// returned as is.
pub fn banner(text: Option<&str>, ch: &str, length: usize) -> String {
    let Some(text) = text else {
        return fill(ch, length);
    };
    let text_len = text.chars().count();
    let ch_len = ch.chars().count();
    if text_len + 2 + ch_len * 2 > length {
        return text.to_string();
    }
    let remain = length - (text_len + 2);
    let prefix_len = remain / 2;
    let suffix_len = remain - prefix_len;
    format!("{} {} {}", fill(ch, prefix_len), text, fill(ch, suffix_len))
}

pub fn missing_file_message(path: &Path) -> String {
    format!(
        "{}\nFile {} not found!",
        banner(Some("ERROR"), "#", BANNER_WIDTH),
        path.display()
    )
}
