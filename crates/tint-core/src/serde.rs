#![cfg(feature = "serde")]

use serde::ser::*;

use crate::image::Image;
use crate::pixel::Pixel;

impl Serialize for Pixel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Pixel", 3)?;

        state.serialize_field("red", &self.red())?;
        state.serialize_field("green", &self.green())?;
        state.serialize_field("blue", &self.blue())?;

        state.end()
    }
}

/// Only image metadata is serialized, pixels are left out
impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Image", 2)?;

        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;

        state.end()
    }
}
