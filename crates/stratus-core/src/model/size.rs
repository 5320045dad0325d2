/// Size and currency formatting utilities — human-readable output.
///
/// All internal sizes are `u64` bytes; GB figures used by the cost model
/// are binary gigabytes (1024³). Floating point is only used at the
/// cost-model and display-formatting boundaries.

/// Bytes per binary gigabyte. The whole cost model works in this unit.
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) but labels them with common short forms
/// (KB, MB, GB, TB) because that is what users expect in a storage tool.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// Format a USD amount with two decimals, e.g. `$12.50`.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
