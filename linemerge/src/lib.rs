/// Appends to `lines` every entry of `required` that is not already present,
/// in `required` order, and returns how many entries were added.
///
/// Existing lines are never removed, reordered, or deduplicated; an entry
/// already present anywhere in `lines` is left where it is. Running the merge
/// a second time with the same `required` set is therefore a no-op.
///
/// # Example
/// ```
/// let mut lines = vec!["target/".to_string(), "/Vagrantfile".to_string()];
/// let added = linemerge::merge_missing(&mut lines, &["/Vagrantfile", "/puphpet/"]);
///
/// assert_eq!(added, 1);
/// assert_eq!(lines, vec!["target/", "/Vagrantfile", "/puphpet/"]);
/// ```
pub fn merge_missing<S: AsRef<str>>(lines: &mut Vec<String>, required: &[S]) -> usize {
    let mut added = 0;

    for entry in required {
        let entry = entry.as_ref();

        if !lines.iter().any(|line| line == entry) {
            lines.push(entry.to_string());
            added += 1;
        }
    }

    added
}
