//! Current weather readings and the WMO code lookup.

/// A current-conditions snapshot for one location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f32,
    pub wind_speed_kmh: f32,
    /// WMO weather interpretation code.
    pub code: u16,
}

impl WeatherReading {
    /// Human-readable label for the weather code. Codes outside the
    /// lookup table fall back to "Unknown" rather than failing.
    pub fn description(&self) -> &'static str {
        match lookup(self.code) {
            Some((_, text)) => text,
            None => "Unknown",
        }
    }

    /// Display glyph for the weather code, if the table has one.
    pub fn glyph(&self) -> Option<&'static str> {
        lookup(self.code).map(|(glyph, _)| glyph)
    }
}

/// Fixed WMO code table: glyph plus description.
fn lookup(code: u16) -> Option<(&'static str, &'static str)> {
    match code {
        0 => Some(("☀", "Clear sky")),
        1 => Some(("🌤", "Mainly clear")),
        2 => Some(("⛅", "Partly cloudy")),
        3 => Some(("☁", "Overcast")),
        45 => Some(("🌫", "Fog")),
        48 => Some(("🌫", "Depositing rime fog")),
        51 => Some(("🌦", "Light drizzle")),
        61 => Some(("🌧", "Rain")),
        71 => Some(("🌨", "Snow")),
        80 => Some(("🌧", "Rain showers")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(code: u16) -> WeatherReading {
        WeatherReading {
            temperature_c: 20.0,
            wind_speed_kmh: 5.0,
            code,
        }
    }

    #[test]
    fn known_codes_map_to_descriptions() {
        assert_eq!(reading(0).description(), "Clear sky");
        assert_eq!(reading(3).description(), "Overcast");
        assert_eq!(reading(80).description(), "Rain showers");
    }

    #[test]
    fn unknown_code_falls_back_without_glyph() {
        let r = reading(95);
        assert_eq!(r.description(), "Unknown");
        assert_eq!(r.glyph(), None);
    }

    #[test]
    fn known_code_has_glyph() {
        assert_eq!(reading(0).glyph(), Some("☀"));
    }
}
