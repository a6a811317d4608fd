pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => {
            f.to_uppercase()
                .collect::<String>()
                + &c.as_str().to_lowercase()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("enhanced"), "Enhanced");
        assert_eq!(capitalize("cLOUD"), "Cloud");
        assert_eq!(capitalize(""), "");
    }
}
