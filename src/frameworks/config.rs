use crate::domain::{Player, Position, Velocity};
use std::{
    env, fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};

// Runtime/server settings, read from the environment (optionally seeded from `.env`).

const DEFAULT_NAME: &str = "Bob";
const DEFAULT_LATITUDE_DEG: f64 = 39.7811;
const DEFAULT_LONGITUDE_DEG: f64 = 84.1104;
const DEFAULT_ALTITUDE_M: f64 = 1251.0;
const DEFAULT_BEARING_DEG: f64 = 90.0;
const DEFAULT_RATE_KPH: f64 = 150.0;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },
    Unparsable {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                field,
                value,
                range,
            } => write!(
                f,
                "{field} value ({value}) is out of range; it must be in the range {range}"
            ),
            ConfigError::Unparsable { field, value } => {
                write!(f, "{field} value ({value:?}) could not be parsed")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Initial player state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub bearing_deg: f64,
    pub rate_kph: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
            altitude_m: DEFAULT_ALTITUDE_M,
            bearing_deg: DEFAULT_BEARING_DEG,
            rate_kph: DEFAULT_RATE_KPH,
        }
    }
}

impl PlayerConfig {
    /// Reads values through `lookup`; a missing key takes its default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            name: lookup("PLAYER_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string()),
            latitude_deg: parse_or(&lookup, "PLAYER_LATITUDE_DEG", DEFAULT_LATITUDE_DEG)?,
            longitude_deg: parse_or(&lookup, "PLAYER_LONGITUDE_DEG", DEFAULT_LONGITUDE_DEG)?,
            altitude_m: parse_or(&lookup, "PLAYER_ALTITUDE_M", DEFAULT_ALTITUDE_M)?,
            bearing_deg: parse_or(&lookup, "PLAYER_BEARING_DEG", DEFAULT_BEARING_DEG)?,
            rate_kph: parse_or(&lookup, "PLAYER_RATE", DEFAULT_RATE_KPH)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check(
            "PLAYER_LATITUDE_DEG",
            self.latitude_deg,
            (-90.0..=90.0).contains(&self.latitude_deg),
            "[-90.0, 90.0]",
        )?;
        check(
            "PLAYER_LONGITUDE_DEG",
            self.longitude_deg,
            (-180.0..=180.0).contains(&self.longitude_deg),
            "[-180.0, 180.0]",
        )?;
        check(
            "PLAYER_ALTITUDE_M",
            self.altitude_m,
            self.altitude_m.is_finite(),
            "(-inf, inf)",
        )?;
        check(
            "PLAYER_BEARING_DEG",
            self.bearing_deg,
            (0.0..360.0).contains(&self.bearing_deg),
            "[0.0, 360.0)",
        )?;
        check(
            "PLAYER_RATE",
            self.rate_kph,
            (0.0..=f64::MAX).contains(&self.rate_kph),
            "[0.0, inf)",
        )
    }

    pub fn into_player(self) -> Player {
        Player::new(
            self.name,
            Position {
                lat: self.latitude_deg,
                lon: self.longitude_deg,
                alt: self.altitude_m,
            },
            Velocity {
                bearing: self.bearing_deg,
                kph: self.rate_kph,
            },
        )
    }
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub player: PlayerConfig,
    pub host: IpAddr,
    pub port: u16,
    pub update_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let update_interval_ms: u64 = parse_or(
            &lookup,
            "PLAYER_UPDATE_INTERVAL_MS",
            DEFAULT_UPDATE_INTERVAL.as_millis() as u64,
        )?;
        if update_interval_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "PLAYER_UPDATE_INTERVAL_MS",
                value: 0.0,
                range: "[1, inf)",
            });
        }

        Ok(Self {
            player: PlayerConfig::from_lookup(&lookup)?,
            host: parse_or(&lookup, "PLAYER_SERVER_HOST", DEFAULT_HOST)?,
            port: parse_or(&lookup, "PLAYER_SERVER_PORT", DEFAULT_PORT)?,
            update_interval: Duration::from_millis(update_interval_ms),
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T, F>(lookup: &F, field: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(field) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Unparsable { field, value: raw }),
        None => Ok(default),
    }
}

fn check(field: &'static str, value: f64, ok: bool, range: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn when_nothing_is_set_then_defaults_are_used() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.player.name, "Bob");
        assert_eq!(config.player.latitude_deg, 39.7811);
        assert_eq!(config.player.longitude_deg, 84.1104);
        assert_eq!(config.player.altitude_m, 1251.0);
        assert_eq!(config.player.bearing_deg, 90.0);
        assert_eq!(config.player.rate_kph, 150.0);
        assert_eq!(config.update_interval, Duration::from_secs(1));
        assert_eq!(config.address(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn when_values_are_set_then_they_override_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PLAYER_NAME", "Alice"),
            ("PLAYER_LATITUDE_DEG", "-90"),
            ("PLAYER_LONGITUDE_DEG", " 180 "),
            ("PLAYER_ALTITUDE_M", "-12.5"),
            ("PLAYER_BEARING_DEG", "0"),
            ("PLAYER_RATE", "0"),
            ("PLAYER_SERVER_HOST", "127.0.0.1"),
            ("PLAYER_SERVER_PORT", "9000"),
            ("PLAYER_UPDATE_INTERVAL_MS", "250"),
        ]))
        .expect("valid config");

        assert_eq!(config.player.name, "Alice");
        assert_eq!(config.player.latitude_deg, -90.0);
        assert_eq!(config.player.longitude_deg, 180.0);
        assert_eq!(config.player.altitude_m, -12.5);
        assert_eq!(config.player.bearing_deg, 0.0);
        assert_eq!(config.player.rate_kph, 0.0);
        assert_eq!(config.address(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.update_interval, Duration::from_millis(250));
    }

    #[test]
    fn when_values_are_out_of_range_then_names_field_and_range() {
        let cases = [
            ("PLAYER_LATITUDE_DEG", "90.5", "[-90.0, 90.0]"),
            ("PLAYER_LONGITUDE_DEG", "-180.1", "[-180.0, 180.0]"),
            ("PLAYER_BEARING_DEG", "360", "[0.0, 360.0)"),
            ("PLAYER_BEARING_DEG", "-1", "[0.0, 360.0)"),
            ("PLAYER_RATE", "-0.5", "[0.0, inf)"),
            ("PLAYER_RATE", "inf", "[0.0, inf)"),
            ("PLAYER_LATITUDE_DEG", "NaN", "[-90.0, 90.0]"),
        ];

        for (key, raw, expected_range) in cases {
            let err = PlayerConfig::from_lookup(lookup_from(&[(key, raw)]))
                .expect_err("value should be rejected");
            match &err {
                ConfigError::OutOfRange { field, range, .. } => {
                    assert_eq!(*field, key);
                    assert_eq!(*range, expected_range);
                }
                other => panic!("unexpected error for {key}={raw}: {other:?}"),
            }
            assert!(err.to_string().starts_with(key));
        }
    }

    #[test]
    fn when_value_is_not_a_number_then_reports_unparsable() {
        let err = PlayerConfig::from_lookup(lookup_from(&[("PLAYER_RATE", "fast")]))
            .expect_err("value should be rejected");

        assert_eq!(
            err,
            ConfigError::Unparsable {
                field: "PLAYER_RATE",
                value: "fast".to_string(),
            }
        );
    }

    #[test]
    fn when_update_interval_is_zero_then_it_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PLAYER_UPDATE_INTERVAL_MS", "0")]))
            .expect_err("zero interval");

        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "PLAYER_UPDATE_INTERVAL_MS",
                ..
            }
        ));
    }

    #[test]
    fn config_becomes_the_initial_player() {
        let player = PlayerConfig::default().into_player();

        assert_eq!(player.name, "Bob");
        assert_eq!(player.position.alt, 1251.0);
        assert_eq!(player.velocity.kph, 150.0);
    }
}
