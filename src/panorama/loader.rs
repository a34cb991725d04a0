//! Coordinate-manifest loading and parsing.
//!
//! The manifest lists one tab-separated row per panorama:
//! `filename  time  longitude  latitude  altitude  course  pitch  roll`,
//! with a header line first and filenames optionally wrapped in double
//! quotes. Numeric fields that fail to parse become NaN and propagate with a
//! warning; the format has historically shipped with no validation and
//! silently "fixing" rows here would change what renders.

use cgmath::Vector3;

use super::image::PanoramaImage;
use super::set::PanoramaSet;
use crate::error::ManifestError;

/// Maps (longitude, latitude) to local planar (x, y).
pub type ForwardTransform<'a> = dyn Fn(f64, f64) -> (f64, f64) + 'a;

/// Loads panorama sets from coordinate manifests.
pub struct PanoramaLoader;

impl PanoramaLoader {
    /// Fetches `<base_url>/coordinates.txt` and parses it into a set.
    ///
    /// `transform` is the forward projection for longitude/latitude;
    /// `None` means identity.
    pub fn load(
        base_url: &str,
        transform: Option<&ForwardTransform>,
    ) -> Result<PanoramaSet, ManifestError> {
        let url = format!("{base_url}/coordinates.txt");
        let text = ureq::get(&url)
            .call()
            .map_err(|e| ManifestError::Fetch {
                url: url.clone(),
                source: Box::new(e),
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| ManifestError::Fetch {
                url: url.clone(),
                source: Box::new(e),
            })?;
        log::debug!("loaded panorama manifest from {url}");
        Ok(Self::parse(&text, base_url, transform))
    }

    /// Parses manifest text. The first line is a discarded header; blank
    /// lines produce no entry.
    pub fn parse(
        text: &str,
        base_url: &str,
        transform: Option<&ForwardTransform>,
    ) -> PanoramaSet {
        let identity = |longitude: f64, latitude: f64| (longitude, latitude);
        let forward: &ForwardTransform = transform.unwrap_or(&identity);

        let mut set = PanoramaSet::new();
        for line in text.lines().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split('\t').collect();

            let filename = tokens.first().unwrap_or(&"").replace('"', "");
            let time = numeric_field(&tokens, 1, line);
            let longitude = numeric_field(&tokens, 2, line);
            let latitude = numeric_field(&tokens, 3, line);
            let altitude = numeric_field(&tokens, 4, line);
            let course = numeric_field(&tokens, 5, line);
            let pitch = numeric_field(&tokens, 6, line);
            let roll = numeric_field(&tokens, 7, line);

            let (x, y) = forward(longitude, latitude);
            let position = Vector3::new(x, y, altitude);

            set.push_image(PanoramaImage::new(
                format!("{base_url}/{filename}"),
                time,
                longitude,
                latitude,
                altitude,
                course,
                pitch,
                roll,
                position,
            ));
        }
        set
    }
}

fn numeric_field(tokens: &[&str], index: usize, line: &str) -> f64 {
    let raw = tokens.get(index).copied().unwrap_or("");
    let value: f64 = raw.trim().parse().unwrap_or(f64::NAN);
    if value.is_nan() {
        log::warn!("malformed numeric field {index} in manifest row {line:?}");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://host/panos";

    #[test]
    fn parses_single_row_with_identity_transform() {
        let text = "header\nname.jpg\t0\t10.0\t20.0\t5.0\t0\t0\t0\n";
        let set = PanoramaLoader::parse(text, BASE, None);
        assert_eq!(set.images().len(), 1);

        let image = &set.images()[0];
        assert!(image.file.ends_with("name.jpg"));
        assert_eq!(image.longitude, 10.0);
        assert_eq!(image.latitude, 20.0);
        assert_eq!(image.altitude, 5.0);
        assert_eq!(image.position, Vector3::new(10.0, 20.0, 5.0));
        assert_eq!(set.markers().len(), 1);
        assert_eq!(set.markers()[0].position, Vector3::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "header\n\nname.jpg\t0\t1\t2\t3\t0\t0\t0\n\n   \n";
        let set = PanoramaLoader::parse(text, BASE, None);
        assert_eq!(set.images().len(), 1);
    }

    #[test]
    fn quotes_are_stripped_from_filenames() {
        let text = "header\n\"quoted name.jpg\"\t0\t1\t2\t3\t0\t0\t0\n";
        let set = PanoramaLoader::parse(text, BASE, None);
        assert!(set.images()[0].file.ends_with("quoted name.jpg"));
        assert!(!set.images()[0].file.contains('"'));
    }

    #[test]
    fn forward_transform_projects_local_position() {
        let text = "header\nname.jpg\t0\t10.0\t20.0\t5.0\t0\t0\t0\n";
        let scale = |longitude: f64, latitude: f64| (longitude * 2.0, latitude * 2.0);
        let set = PanoramaLoader::parse(text, BASE, Some(&scale));
        assert_eq!(set.images()[0].position, Vector3::new(20.0, 40.0, 5.0));
        // Geodetic fields keep the raw values.
        assert_eq!(set.images()[0].longitude, 10.0);
    }

    #[test]
    fn malformed_numerics_become_nan_and_still_yield_an_entry() {
        let text = "header\nname.jpg\t0\tnot-a-number\t20.0\t5.0\t0\t0\t0\n";
        let set = PanoramaLoader::parse(text, BASE, None);
        assert_eq!(set.images().len(), 1);
        assert!(set.images()[0].longitude.is_nan());
        assert_eq!(set.images()[0].latitude, 20.0);
    }

    #[test]
    fn short_rows_fill_missing_fields_with_nan() {
        let text = "header\nname.jpg\t0\t10.0\n";
        let set = PanoramaLoader::parse(text, BASE, None);
        assert_eq!(set.images().len(), 1);
        assert!(set.images()[0].latitude.is_nan());
        assert!(set.images()[0].roll.is_nan());
    }

    #[test]
    fn header_only_manifest_is_empty() {
        let set = PanoramaLoader::parse("header\n", BASE, None);
        assert!(set.images().is_empty());
    }
}
