use std::fmt;

use crate::presentation::view_models::CodeListingViewModel;

/// Raw source only, so the output can be redirected into a `.qs` file
pub struct CodeListingView<'a> {
    pub data: &'a CodeListingViewModel,
}

impl<'a> fmt::Display for CodeListingView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.source)
    }
}
