/*

    Provide utilities to parse history bounds JSON files.

    Expected format:
    {
        "BoundsLimit": "64",
        "BoundsPerBucket": 8,
        "Positions": ["0 0 0", [1.5, 0, -2], ...]
    }

    Integers can be given both in quotes (string) or as is.
    Positions can be given as "<x> <y> <z>" strings or as
    [x, y, z] arrays. Missing settings fall back to defaults.

    @date: 18 Oct, 2026
    @author: bartu
*/

use std::fmt;
use std::fs::File;
use std::io::BufReader;

use serde_json;
use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::prelude::*;
use crate::history::HistoryBoundsSettings;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryInputJSON {
    #[serde(flatten)]
    pub settings: HistoryBoundsSettings,

    #[serde(default)]
    pub positions: Vec<PointJSON>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointJSON(pub Vector3);

impl<'de> Deserialize<'de> for PointJSON {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deser_vec3(deserializer).map(PointJSON)
    }
}

pub fn parse_settings(path: &str) -> Result<HistoryBoundsSettings, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading settings from {}", path);

    let settings: HistoryBoundsSettings = serde_json::from_reader(reader)?;
    Ok(settings)
}

pub fn parse_history_input(path: &str) -> Result<HistoryInputJSON, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_history");
    let _enter = span.enter();

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    let input: HistoryInputJSON = serde_json::from_reader(reader)?;
    debug!("Read {} positions", input.positions.len());
    Ok(input)
}

pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid unsigned integer")),
        serde_json::Value::String(s) => s.trim().parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse unsigned integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {:#?}", t))),
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let y: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let z: Float = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            if seq.next_element::<Float>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

fn parse_vec3_str(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<Float>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<Float>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<Float>().map_err(|e| e.to_string())?;
    Ok(Vector3::new(x, y, z))
}
