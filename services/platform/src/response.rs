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

//! Response schemas of the nutrition platform.

use log::debug;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A field the platform returns either as a single object or as an array.
///
/// Arrays are always decoded as `Many`, even with one element: a struct
/// made of optional fields would otherwise accept the array as a sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Zero or more entries.
    Many(Vec<T>),
    /// Exactly one entry.
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// Flatten into a vec.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(v) => v,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(v) => v.len(),
        }
    }

    /// Returns true if there is no entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Platform ids are numbers encoded as JSON strings.
fn id_from_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().map_err(de::Error::custom),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("invalid id: {n}"))),
        v => Err(de::Error::custom(format!("invalid id: {v}"))),
    }
}

fn unknown() -> String {
    "Unknown".to_string()
}

/// Response of `foods.search`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FoodSearchResponse {
    /// Matched foods, absent when nothing matched.
    #[serde(default)]
    pub foods: FoodList,
}

impl FoodSearchResponse {
    /// All matched foods.
    pub fn into_foods(self) -> Vec<FoodSummary> {
        self.foods.food.into_vec()
    }
}

/// Wrapper object around the matched foods.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FoodList {
    /// The matched foods.
    #[serde(default)]
    pub food: OneOrMany<FoodSummary>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodSummary {
    /// Platform id of the food.
    #[serde(deserialize_with = "id_from_str")]
    pub food_id: u64,
    /// Display name.
    pub food_name: String,
    /// Brand, absent for generic foods.
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Short nutrition summary such as `Per 100g - Calories: 52kcal`.
    #[serde(default)]
    pub food_description: Option<String>,
}

/// Response of `food.get.v2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodGetResponse {
    /// The requested food.
    pub food: FoodDetail,
}

/// Details of one food.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodDetail {
    /// Platform id of the food.
    #[serde(deserialize_with = "id_from_str")]
    pub food_id: u64,
    /// Display name, `Unknown` when absent.
    #[serde(default = "unknown")]
    pub food_name: String,
    /// Short nutrition summary.
    #[serde(default)]
    pub food_description: Option<String>,
    /// Known servings of this food.
    #[serde(default)]
    pub servings: Option<Servings>,
}

impl FoodDetail {
    /// Human readable `"<description>: <calories> calories"` lines.
    ///
    /// Servings missing either field are skipped.
    pub fn serving_summaries(&self) -> Vec<String> {
        let Some(servings) = &self.servings else {
            return Vec::new();
        };

        let all: Vec<&Serving> = match &servings.serving {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(v) => v.iter().collect(),
        };
        all.into_iter()
            .filter_map(|s| match (&s.serving_description, &s.calories) {
                (Some(desc), Some(cal)) => Some(format!("{desc}: {cal} calories")),
                _ => None,
            })
            .collect()
    }
}

/// Wrapper object around the servings of a food.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Servings {
    /// One or more servings.
    #[serde(default)]
    pub serving: OneOrMany<Serving>,
}

/// One serving of a food.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Serving {
    /// Human readable size, such as `1 medium`.
    #[serde(default)]
    pub serving_description: Option<String>,
    /// Energy in kcal, as sent by the platform.
    #[serde(default)]
    pub calories: Option<String>,
}

/// Response of the image recognition API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageRecognitionResponse {
    /// Recognized foods, absent when nothing was found.
    #[serde(default)]
    pub foods: RecognizedFoodList,
}

/// Wrapper object around the recognized foods.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecognizedFoodList {
    /// The recognized foods.
    #[serde(default)]
    pub food: OneOrMany<RawRecognizedFood>,
}

/// An entry as sent by the platform, fields are loosely typed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecognizedFood {
    /// Platform id, a string or a number.
    #[serde(default)]
    pub food_id: Option<Value>,
    /// Display name.
    #[serde(default)]
    pub food_name: Option<String>,
    /// Confidence in `0..=1`, a string or a number.
    #[serde(default)]
    pub confidence: Option<Value>,
}

/// A food found on a picture.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedFood {
    /// Platform id of the food.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Confidence in `0..=1`.
    pub confidence: f64,
}

impl ImageRecognitionResponse {
    /// Recognized foods, entries that can't be parsed are dropped.
    pub fn recognized(&self) -> Vec<RecognizedFood> {
        let raw: Vec<&RawRecognizedFood> = match &self.foods.food {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(v) => v.iter().collect(),
        };

        raw.into_iter()
            .filter_map(|f| {
                let food = f.parse();
                if food.is_none() {
                    debug!("dropping unparsable recognized food: {f:?}");
                }
                food
            })
            .collect()
    }
}

impl RawRecognizedFood {
    fn parse(&self) -> Option<RecognizedFood> {
        let id = match self.food_id.as_ref()? {
            Value::String(s) => s.parse().ok()?,
            Value::Number(n) => n.as_u64()?,
            _ => return None,
        };
        let confidence = match self.confidence.as_ref()? {
            Value::String(s) => s.parse().ok()?,
            Value::Number(n) => n.as_f64()?,
            _ => return None,
        };

        Some(RecognizedFood {
            id,
            name: self.food_name.clone()?,
            confidence,
        })
    }
}

/// The platform's error envelope, `{"error": {"code": .., "message": ..}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformError {
    /// Numeric error code.
    #[serde(default)]
    pub code: Option<Value>,
    /// Human readable reason.
    #[serde(default)]
    pub message: Option<String>,
}
