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

// Env values used in nutrisign-platform.
pub const NUTRISIGN_SERVER_API_URL: &str = "NUTRISIGN_SERVER_API_URL";
pub const NUTRISIGN_IMAGE_RECOGNITION_URL: &str = "NUTRISIGN_IMAGE_RECOGNITION_URL";

pub const DEFAULT_SERVER_API_URL: &str = "https://platform.fatsecret.com/rest/server.api";
pub const DEFAULT_IMAGE_RECOGNITION_URL: &str =
    "https://platform.fatsecret.com/rest/image-recognition/v1";

// Values of the `method` parameter.
pub const METHOD_FOODS_SEARCH: &str = "foods.search";
pub const METHOD_FOOD_GET: &str = "food.get.v2";
pub const METHOD_IMAGE_RECOGNITION: &str = "POST";

pub const FORMAT_JSON: &str = "json";
