// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GeoJSON layers of the navigation data.

use geo::{BoundingRect, Rect};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use crate::nd::NavigationData;

fn rect_to_bbox(rect: Rect<f64>) -> Vec<f64> {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

fn collection(features: Vec<Feature>) -> GeoJson {
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

impl NavigationData {
    /// Returns the airspaces as polygon features.
    ///
    /// Every feature has the `name`, `class`, `upper` and `lower` properties.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn airspaces_to_geojson(&self) -> GeoJson {
        let features = self
            .airspaces()
            .iter()
            .map(|airspace| {
                let mut feature = Feature {
                    bbox: airspace.polygon.bounding_rect().map(rect_to_bbox),
                    geometry: Some(Geometry::new(Value::from(&airspace.polygon))),
                    id: None,
                    properties: None,
                    foreign_members: None,
                };
                feature.set_property("name", airspace.name.clone());
                feature.set_property("class", airspace.class.to_string());
                feature.set_property("upper", airspace.upper.clone());
                feature.set_property("lower", airspace.lower.clone());
                feature
            })
            .collect();

        collection(features)
    }

    /// Returns the navaids as point features.
    ///
    /// Every feature has the `ident`, `name`, `type`, `region` and
    /// `frequency` properties.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn navaids_to_geojson(&self) -> GeoJson {
        let features = self
            .navaids()
            .iter()
            .map(|navaid| {
                let mut feature = Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::from(&navaid.coordinate))),
                    id: None,
                    properties: None,
                    foreign_members: None,
                };
                feature.set_property("ident", navaid.ident.clone());
                feature.set_property("name", navaid.name.clone());
                feature.set_property("type", navaid.navaid_type.to_string());
                feature.set_property("region", navaid.region.clone());
                feature.set_property("frequency", navaid.frequency);
                feature
            })
            .collect();

        collection(features)
    }
}
