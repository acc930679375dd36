pub(crate) trait FastaIDs {
    /// The identifier of a header: the first whitespace-delimited word, which
    /// is empty for a blank header.
    fn get_id(&self) -> &str;

    /// The free text following the identifier, if any.
    fn get_annotation(&self) -> Option<&str>;
}

impl<S: AsRef<str> + ?Sized> FastaIDs for S {
    fn get_id(&self) -> &str {
        self.as_ref().split_whitespace().next().unwrap_or_default()
    }

    fn get_annotation(&self) -> Option<&str> {
        let s = self.as_ref().trim_start();
        let end_id = s.find(char::is_whitespace)?;
        let annotation = s[end_id..].trim();
        (!annotation.is_empty()).then_some(annotation)
    }
}
