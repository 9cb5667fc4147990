use chrono::Timelike;

/// Wall-clock timestamp as displayed by the sketches,
/// `YYYY/MM/DD HH:MM:SS.mmmm`.
pub fn timestamp() -> String {
    let now = chrono::Local::now();
    format!(
        "{}.{:04}",
        now.format("%Y/%m/%d %H:%M:%S"),
        now.nanosecond() / 1_000_000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_expected_shape() {
        let ts = timestamp();
        // YYYY/MM/DD HH:MM:SS.mmmm
        assert_eq!(ts.len(), 24);
        assert_eq!(&ts[4..5], "/");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[19..20], ".");
    }
}
