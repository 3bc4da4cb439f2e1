use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddMovieForm {
    pub title: String,
}

impl AddMovieForm {
    pub fn validate(&self) -> Result<String, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Movie name is required");
        }
        Ok(title.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct RateMovieForm {
    pub rating: String,
    pub review: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct RateFormErrors {
    pub rating: Option<&'static str>,
    pub review: Option<&'static str>,
}

impl RateFormErrors {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.review.is_none()
    }
}

impl RateMovieForm {
    pub fn validate(&self) -> Result<(f64, String), RateFormErrors> {
        let mut errors = RateFormErrors::default();

        let rating = self.rating.trim();
        let parsed = if rating.is_empty() {
            errors.rating = Some("Rating is required");
            None
        } else {
            match rating.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.rating = Some("Rating must be a number, e.g. 7.5");
                    None
                }
            }
        };

        let review = self.review.trim();
        if review.is_empty() {
            errors.review = Some("Review is required");
        }

        match parsed {
            Some(value) if errors.is_empty() => Ok((value, review.to_string())),
            _ => Err(errors),
        }
    }
}

/// Year portion of a catalog release date, the text before the first `-`.
pub fn release_year(release_date: &str) -> Option<i32> {
    release_date.split('-').next()?.trim().parse().ok()
}

/// Absolute poster URL, empty when the catalog has no poster for the movie.
pub fn image_url(base: &str, poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) => format!("{}{}", base.trim_end_matches('/'), path),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_takes_text_before_first_separator() {
        assert_eq!(release_year("1999-10-15"), Some(1999));
        assert_eq!(release_year("2024"), Some(2024));
    }

    #[test]
    fn release_year_rejects_empty_and_garbage() {
        assert_eq!(release_year(""), None);
        assert_eq!(release_year("soon-ish"), None);
    }

    #[test]
    fn image_url_joins_base_and_path() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500", Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(image_url("https://image.tmdb.org/t/p/w500/", Some("/abc.jpg")), "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn image_url_is_empty_without_poster() {
        assert_eq!(image_url("https://image.tmdb.org/t/p/w500", None), "");
    }

    #[test]
    fn add_form_requires_a_title() {
        let form = AddMovieForm { title: "   ".to_string() };
        assert_eq!(form.validate(), Err("Movie name is required"));

        let form = AddMovieForm { title: "  Fight Club  ".to_string() };
        assert_eq!(form.validate(), Ok("Fight Club".to_string()));
    }

    #[test]
    fn rate_form_parses_rating_and_keeps_review_verbatim() {
        let form = RateMovieForm { rating: "7.5".to_string(), review: "Great film".to_string() };
        assert_eq!(form.validate(), Ok((7.5, "Great film".to_string())));
    }

    #[test]
    fn rate_form_rejects_non_numeric_rating() {
        let form = RateMovieForm { rating: "ten".to_string(), review: "Great film".to_string() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.rating, Some("Rating must be a number, e.g. 7.5"));
        assert_eq!(errors.review, None);
    }

    #[test]
    fn rate_form_requires_both_fields() {
        let form = RateMovieForm { rating: "".to_string(), review: " ".to_string() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.rating, Some("Rating is required"));
        assert_eq!(errors.review, Some("Review is required"));
    }
}
