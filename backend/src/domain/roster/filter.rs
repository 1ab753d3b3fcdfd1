//! Course selection for one aggregation request.

/// Which courses an aggregation covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFilter {
    /// Every course in the catalogue, in upstream order.
    All,
    /// The first course whose name equals the value exactly.
    ExactName(String),
}

impl CourseFilter {
    /// Interpret an optional request parameter.
    ///
    /// An absent or empty parameter lists every course. Any other value is
    /// taken verbatim as an exact, case-sensitive name.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::CourseFilter;
    ///
    /// assert_eq!(CourseFilter::from_param(None), CourseFilter::All);
    /// assert_eq!(CourseFilter::from_param(Some("")), CourseFilter::All);
    /// assert_eq!(
    ///     CourseFilter::from_param(Some("Intro")),
    ///     CourseFilter::ExactName("Intro".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") => Self::All,
            Some(name) => Self::ExactName(name.to_owned()),
        }
    }

    /// Short label for structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ExactName(_) => "exact_name",
        }
    }
}
