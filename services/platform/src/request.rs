// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Typed calls of the nutrition platform.

use std::fmt::Debug;

use http::Method;
use nutrisign_core::hash::base64_encode;
use nutrisign_core::{Error, Result};
use nutrisign_oauth1::{ParameterLocation, ParameterSet};
use serde::de::DeserializeOwned;

use crate::constants::*;
use crate::response::{FoodGetResponse, FoodSearchResponse, ImageRecognitionResponse};
use crate::PlatformConfig;

/// PlatformRequest describes one call of the nutrition platform.
///
/// Implementors only declare what the call looks like; signing and
/// serialization happen in [`crate::Platform`].
pub trait PlatformRequest: Debug {
    /// The decoded response body.
    type Response: DeserializeOwned;

    /// The http method used to send the call.
    fn http_method(&self) -> Method;

    /// The base url this call is sent to.
    fn endpoint<'a>(&self, config: &'a PlatformConfig) -> &'a str;

    /// Where the signed parameters travel.
    fn location(&self) -> ParameterLocation;

    /// The business parameters of this call, OAuth boilerplate excluded.
    fn parameters(&self) -> Result<ParameterSet>;
}

/// Search foods by free text, `foods.search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodSearch {
    /// Text to search for.
    pub search_expression: String,
}

impl FoodSearch {
    /// Create a new search for given text.
    pub fn new(search_expression: impl Into<String>) -> Self {
        Self {
            search_expression: search_expression.into(),
        }
    }
}

impl PlatformRequest for FoodSearch {
    type Response = FoodSearchResponse;

    fn http_method(&self) -> Method {
        Method::GET
    }

    fn endpoint<'a>(&self, config: &'a PlatformConfig) -> &'a str {
        &config.server_api_url
    }

    fn location(&self) -> ParameterLocation {
        ParameterLocation::Query
    }

    fn parameters(&self) -> Result<ParameterSet> {
        if self.search_expression.trim().is_empty() {
            return Err(Error::request_invalid("search expression is empty"));
        }

        Ok(ParameterSet::from([
            ("method", METHOD_FOODS_SEARCH),
            ("search_expression", self.search_expression.as_str()),
            ("format", FORMAT_JSON),
        ]))
    }
}

/// Load the details of one food, `food.get.v2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodGet {
    /// Platform id of the food.
    pub food_id: u64,
}

impl FoodGet {
    /// Create a new lookup of given food.
    pub fn new(food_id: u64) -> Self {
        Self { food_id }
    }
}

impl PlatformRequest for FoodGet {
    type Response = FoodGetResponse;

    fn http_method(&self) -> Method {
        Method::GET
    }

    fn endpoint<'a>(&self, config: &'a PlatformConfig) -> &'a str {
        &config.server_api_url
    }

    fn location(&self) -> ParameterLocation {
        ParameterLocation::Query
    }

    fn parameters(&self) -> Result<ParameterSet> {
        Ok(ParameterSet::new()
            .with("method", METHOD_FOOD_GET)
            .with("food_id", self.food_id.to_string())
            .with("format", FORMAT_JSON))
    }
}

/// Recognize foods on a picture.
///
/// The image travels base64 encoded inside the form body, so it's part of
/// the signature.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageRecognition {
    /// Base64 encoded image.
    pub image: String,
}

impl ImageRecognition {
    /// Create from an already base64 encoded image.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }

    /// Create from raw image bytes, typically a JPEG.
    pub fn from_bytes(image: &[u8]) -> Result<Self> {
        if image.is_empty() {
            return Err(Error::request_invalid("image is empty"));
        }
        Ok(Self::new(base64_encode(image)))
    }
}

impl Debug for ImageRecognition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRecognition")
            .field("image", &format_args!("<{} bytes base64>", self.image.len()))
            .finish()
    }
}

impl PlatformRequest for ImageRecognition {
    type Response = ImageRecognitionResponse;

    fn http_method(&self) -> Method {
        Method::POST
    }

    fn endpoint<'a>(&self, config: &'a PlatformConfig) -> &'a str {
        &config.image_recognition_url
    }

    fn location(&self) -> ParameterLocation {
        ParameterLocation::FormBody
    }

    fn parameters(&self) -> Result<ParameterSet> {
        if self.image.is_empty() {
            return Err(Error::request_invalid("image is empty"));
        }

        Ok(ParameterSet::from([
            ("method", METHOD_IMAGE_RECOGNITION),
            ("format", FORMAT_JSON),
            ("image", self.image.as_str()),
        ]))
    }
}
