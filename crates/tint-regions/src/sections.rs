/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::ops::RangeInclusive;

use tint_core::log::error;
use tint_core::pixel::Pixel;

use crate::errors::RegionErrors;

/// Averages of consecutive sections of a line or strip
///
/// Section queries never abort. When the request cannot be satisfied
/// the error is logged and kept here, and the averages are empty.
///
/// ```
/// use tint_core::image::Image;
/// use tint_core::pixel::Pixel;
/// use tint_regions::{average_colors_top_line, RegionErrors};
///
/// let image = Image::fill(Pixel::new(1, 2, 3), 8, 8).unwrap();
///
/// let sections = average_colors_top_line(&image, 0);
/// assert!(sections.is_empty());
/// assert!(matches!(sections.error(), Some(RegionErrors::InvalidArgument(..))));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sections {
    averages: Vec<Pixel>,
    error:    Option<RegionErrors>
}

impl Sections {
    pub(crate) fn new(averages: Vec<Pixel>) -> Sections {
        Sections {
            averages,
            error: None
        }
    }
    /// Report `error` and return an empty result carrying it
    pub(crate) fn failed(error: RegionErrors) -> Sections {
        error!("{}", error);

        Sections {
            averages: Vec::new(),
            error:    Some(error)
        }
    }
    /// Section averages in order
    pub fn averages(&self) -> &[Pixel] {
        &self.averages
    }
    /// The error that stopped the query, if any
    pub fn error(&self) -> Option<&RegionErrors> {
        self.error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Pixel> {
        self.averages.iter()
    }
    /// Convert to a `Result`, for callers that prefer to propagate
    ///
    /// # Errors
    /// The error recorded by the query
    pub fn into_result(self) -> Result<Vec<Pixel>, RegionErrors> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.averages)
        }
    }
}

impl IntoIterator for Sections {
    type Item = Pixel;
    type IntoIter = std::vec::IntoIter<Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.averages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Pixel;
    type IntoIter = core::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.averages.iter()
    }
}

/// Split `0..len` into `num_sections` inclusive ranges of `len / num_sections`
/// elements each
///
/// Elements past `num_sections * (len / num_sections)` belong to no section.
///
/// # Errors
/// - [`RegionErrors::InvalidArgument`] if `num_sections` is zero
/// - [`RegionErrors::EmptyRegion`] if `len < num_sections`, every section would be empty
pub(crate) fn partition(
    len: usize, num_sections: usize
) -> Result<impl Iterator<Item = RangeInclusive<usize>>, RegionErrors> {
    if num_sections == 0 {
        return Err(RegionErrors::InvalidArgument("num_sections", num_sections));
    }
    let step = len / num_sections;

    if step == 0 {
        return Err(RegionErrors::EmptyRegion(
            "more sections than pixels, every section would be empty"
        ));
    }
    Ok((0..num_sections).map(move |i| (i * step)..=((i + 1) * step - 1)))
}

#[cfg(test)]
mod tests {
    use crate::errors::RegionErrors;
    use crate::sections::partition;

    #[test]
    fn remainder_is_excluded() {
        let ranges: Vec<_> = partition(13, 4).unwrap().collect();

        assert_eq!(ranges, vec![0..=2, 3..=5, 6..=8, 9..=11]);
    }

    #[test]
    fn zero_sections_is_invalid() {
        assert!(matches!(
            partition(13, 0),
            Err(RegionErrors::InvalidArgument("num_sections", 0))
        ));
    }

    #[test]
    fn too_many_sections_is_empty() {
        assert!(matches!(
            partition(3, 4),
            Err(RegionErrors::EmptyRegion(_))
        ));
    }
}
