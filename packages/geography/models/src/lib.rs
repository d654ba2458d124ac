#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spanish administrative geography code tables.
//!
//! Provides mappings between the numeric community/province codes used by
//! the national fire statistics files (EGIF) and the display names used as
//! aggregation keys across the fire-map system. The display names match the
//! `CCAA` and `Texto_Alt` properties of the province-boundary `GeoJSON`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Spain's first-level administrative divisions (Autonomous Communities),
/// keyed by the numeric codes used in the fire statistics CSV.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AutonomousCommunity {
    /// Code 1
    PaisVasco = 1,
    /// Code 2
    Cataluna = 2,
    /// Code 3
    Galicia = 3,
    /// Code 4
    Andalucia = 4,
    /// Code 5
    Asturias = 5,
    /// Code 6
    Cantabria = 6,
    /// Code 7
    LaRioja = 7,
    /// Code 8
    Murcia = 8,
    /// Code 9
    Valencia = 9,
    /// Code 10
    Aragon = 10,
    /// Code 11
    CastillaLaMancha = 11,
    /// Code 12
    Canarias = 12,
    /// Code 13
    Navarra = 13,
    /// Code 14
    Extremadura = 14,
    /// Code 15
    Baleares = 15,
    /// Code 16
    Madrid = 16,
    /// Code 17
    CastillaLeon = 17,
    /// Code 18
    Ceuta = 18,
    /// Code 19
    Melilla = 19,
}

/// Error returned when a numeric code does not map to a known
/// [`AutonomousCommunity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCommunityError {
    /// The invalid community code that was provided.
    pub code: u8,
}

impl std::fmt::Display for InvalidCommunityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid community code {}: expected 1-19", self.code)
    }
}

impl std::error::Error for InvalidCommunityError {}

impl AutonomousCommunity {
    /// Returns the numeric code of this community.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Creates a community from its numeric code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not in the range 1-19.
    pub const fn from_code(code: u8) -> Result<Self, InvalidCommunityError> {
        match code {
            1 => Ok(Self::PaisVasco),
            2 => Ok(Self::Cataluna),
            3 => Ok(Self::Galicia),
            4 => Ok(Self::Andalucia),
            5 => Ok(Self::Asturias),
            6 => Ok(Self::Cantabria),
            7 => Ok(Self::LaRioja),
            8 => Ok(Self::Murcia),
            9 => Ok(Self::Valencia),
            10 => Ok(Self::Aragon),
            11 => Ok(Self::CastillaLaMancha),
            12 => Ok(Self::Canarias),
            13 => Ok(Self::Navarra),
            14 => Ok(Self::Extremadura),
            15 => Ok(Self::Baleares),
            16 => Ok(Self::Madrid),
            17 => Ok(Self::CastillaLeon),
            18 => Ok(Self::Ceuta),
            19 => Ok(Self::Melilla),
            _ => Err(InvalidCommunityError { code }),
        }
    }

    /// Returns the official display name, matching the `CCAA` property of
    /// the boundary `GeoJSON`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PaisVasco => "País Vasco",
            Self::Cataluna => "Cataluña",
            Self::Galicia => "Galicia",
            Self::Andalucia => "Andalucía",
            Self::Asturias => "Principado de Asturias",
            Self::Cantabria => "Cantabria",
            Self::LaRioja => "La Rioja",
            Self::Murcia => "Región de Murcia",
            Self::Valencia => "Comunitat Valenciana",
            Self::Aragon => "Aragón",
            Self::CastillaLaMancha => "Castilla - La Mancha",
            Self::Canarias => "Canarias",
            Self::Navarra => "Comunidad Foral de Navarra",
            Self::Extremadura => "Extremadura",
            Self::Baleares => "Illes Balears",
            Self::Madrid => "Comunidad de Madrid",
            Self::CastillaLeon => "Castilla y León",
            Self::Ceuta => "Ceuta",
            Self::Melilla => "Melilla",
        }
    }

    /// Looks up a community by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }

    /// Returns all variants of this enum, in code order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PaisVasco,
            Self::Cataluna,
            Self::Galicia,
            Self::Andalucia,
            Self::Asturias,
            Self::Cantabria,
            Self::LaRioja,
            Self::Murcia,
            Self::Valencia,
            Self::Aragon,
            Self::CastillaLaMancha,
            Self::Canarias,
            Self::Navarra,
            Self::Extremadura,
            Self::Baleares,
            Self::Madrid,
            Self::CastillaLeon,
            Self::Ceuta,
            Self::Melilla,
        ]
    }
}

/// Spain's second-level administrative divisions (provinces), keyed by the
/// INE province codes used in the fire statistics CSV.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Province {
    /// Code 1
    Araba = 1,
    /// Code 2
    Albacete = 2,
    /// Code 3
    Alacant = 3,
    /// Code 4
    Almeria = 4,
    /// Code 5
    Avila = 5,
    /// Code 6
    Badajoz = 6,
    /// Code 7
    Baleares = 7,
    /// Code 8
    Barcelona = 8,
    /// Code 9
    Burgos = 9,
    /// Code 10
    Caceres = 10,
    /// Code 11
    Cadiz = 11,
    /// Code 12
    Castellon = 12,
    /// Code 13
    CiudadReal = 13,
    /// Code 14
    Cordoba = 14,
    /// Code 15
    ACoruna = 15,
    /// Code 16
    Cuenca = 16,
    /// Code 17
    Girona = 17,
    /// Code 18
    Granada = 18,
    /// Code 19
    Guadalajara = 19,
    /// Code 20
    Gipuzcoa = 20,
    /// Code 21
    Huelva = 21,
    /// Code 22
    Huesca = 22,
    /// Code 23
    Jaen = 23,
    /// Code 24
    Leon = 24,
    /// Code 25
    Lleida = 25,
    /// Code 26
    LaRioja = 26,
    /// Code 27
    Lugo = 27,
    /// Code 28
    Madrid = 28,
    /// Code 29
    Malaga = 29,
    /// Code 30
    Murcia = 30,
    /// Code 31
    Navarra = 31,
    /// Code 32
    Ourense = 32,
    /// Code 33
    Asturias = 33,
    /// Code 34
    Palencia = 34,
    /// Code 35
    LasPalmas = 35,
    /// Code 36
    Pontevedra = 36,
    /// Code 37
    Salamanca = 37,
    /// Code 38
    SantaCruz = 38,
    /// Code 39
    Cantabria = 39,
    /// Code 40
    Segovia = 40,
    /// Code 41
    Sevilla = 41,
    /// Code 42
    Soria = 42,
    /// Code 43
    Tarragona = 43,
    /// Code 44
    Teruel = 44,
    /// Code 45
    Toledo = 45,
    /// Code 46
    Valencia = 46,
    /// Code 47
    Valladolid = 47,
    /// Code 48
    Bizkaia = 48,
    /// Code 49
    Zamora = 49,
    /// Code 50
    Zaragoza = 50,
    /// Code 51
    Ceuta = 51,
    /// Code 52
    Melilla = 52,
}

/// Error returned when a numeric code does not map to a known [`Province`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidProvinceError {
    /// The invalid province code that was provided.
    pub code: u8,
}

impl std::fmt::Display for InvalidProvinceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid province code {}: expected 1-52", self.code)
    }
}

impl std::error::Error for InvalidProvinceError {}

impl Province {
    /// Returns the INE numeric code of this province.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Creates a province from its INE numeric code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not in the range 1-52.
    pub const fn from_code(code: u8) -> Result<Self, InvalidProvinceError> {
        match code {
            1 => Ok(Self::Araba),
            2 => Ok(Self::Albacete),
            3 => Ok(Self::Alacant),
            4 => Ok(Self::Almeria),
            5 => Ok(Self::Avila),
            6 => Ok(Self::Badajoz),
            7 => Ok(Self::Baleares),
            8 => Ok(Self::Barcelona),
            9 => Ok(Self::Burgos),
            10 => Ok(Self::Caceres),
            11 => Ok(Self::Cadiz),
            12 => Ok(Self::Castellon),
            13 => Ok(Self::CiudadReal),
            14 => Ok(Self::Cordoba),
            15 => Ok(Self::ACoruna),
            16 => Ok(Self::Cuenca),
            17 => Ok(Self::Girona),
            18 => Ok(Self::Granada),
            19 => Ok(Self::Guadalajara),
            20 => Ok(Self::Gipuzcoa),
            21 => Ok(Self::Huelva),
            22 => Ok(Self::Huesca),
            23 => Ok(Self::Jaen),
            24 => Ok(Self::Leon),
            25 => Ok(Self::Lleida),
            26 => Ok(Self::LaRioja),
            27 => Ok(Self::Lugo),
            28 => Ok(Self::Madrid),
            29 => Ok(Self::Malaga),
            30 => Ok(Self::Murcia),
            31 => Ok(Self::Navarra),
            32 => Ok(Self::Ourense),
            33 => Ok(Self::Asturias),
            34 => Ok(Self::Palencia),
            35 => Ok(Self::LasPalmas),
            36 => Ok(Self::Pontevedra),
            37 => Ok(Self::Salamanca),
            38 => Ok(Self::SantaCruz),
            39 => Ok(Self::Cantabria),
            40 => Ok(Self::Segovia),
            41 => Ok(Self::Sevilla),
            42 => Ok(Self::Soria),
            43 => Ok(Self::Tarragona),
            44 => Ok(Self::Teruel),
            45 => Ok(Self::Toledo),
            46 => Ok(Self::Valencia),
            47 => Ok(Self::Valladolid),
            48 => Ok(Self::Bizkaia),
            49 => Ok(Self::Zamora),
            50 => Ok(Self::Zaragoza),
            51 => Ok(Self::Ceuta),
            52 => Ok(Self::Melilla),
            _ => Err(InvalidProvinceError { code }),
        }
    }

    /// Returns the display name, matching the `Texto_Alt` property of the
    /// boundary `GeoJSON`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Araba => "Araba",
            Self::Albacete => "Albacete",
            Self::Alacant => "Alacant",
            Self::Almeria => "Almería",
            Self::Avila => "Ávila",
            Self::Badajoz => "Badajoz",
            Self::Baleares => "Illes Balears",
            Self::Barcelona => "Barcelona",
            Self::Burgos => "Burgos",
            Self::Caceres => "Cáceres",
            Self::Cadiz => "Cádiz",
            Self::Castellon => "Castelló",
            Self::CiudadReal => "Ciudad Real",
            Self::Cordoba => "Córdoba",
            Self::ACoruna => "A Coruña",
            Self::Cuenca => "Cuenca",
            Self::Girona => "Girona",
            Self::Granada => "Granada",
            Self::Guadalajara => "Guadalajara",
            Self::Gipuzcoa => "Gipuzcoa",
            Self::Huelva => "Huelva",
            Self::Huesca => "Huesca",
            Self::Jaen => "Jaén",
            Self::Leon => "León",
            Self::Lleida => "Lleida",
            Self::LaRioja => "La Rioja",
            Self::Lugo => "Lugo",
            Self::Madrid => "Madrid",
            Self::Malaga => "Málaga",
            Self::Murcia => "Murcia",
            Self::Navarra => "Navarra",
            Self::Ourense => "Ourense",
            Self::Asturias => "Asturias",
            Self::Palencia => "Palencia",
            Self::LasPalmas => "Las Palmas",
            Self::Pontevedra => "Pontevedra",
            Self::Salamanca => "Salamanca",
            Self::SantaCruz => "Santa Cruz de Tenerife",
            Self::Cantabria => "Cantabria",
            Self::Segovia => "Segovia",
            Self::Sevilla => "Sevilla",
            Self::Soria => "Soria",
            Self::Tarragona => "Tarragona",
            Self::Teruel => "Teruel",
            Self::Toledo => "Toledo",
            Self::Valencia => "València",
            Self::Valladolid => "Valladolid",
            Self::Bizkaia => "Bizkaia",
            Self::Zamora => "Zamora",
            Self::Zaragoza => "Zaragoza",
            Self::Ceuta => "Ceuta",
            Self::Melilla => "Melilla",
        }
    }

    /// Returns the Autonomous Community this province belongs to.
    #[must_use]
    pub const fn community(self) -> AutonomousCommunity {
        match self {
            Self::Araba | Self::Gipuzcoa | Self::Bizkaia => AutonomousCommunity::PaisVasco,
            Self::Barcelona | Self::Girona | Self::Lleida | Self::Tarragona => {
                AutonomousCommunity::Cataluna
            }
            Self::ACoruna | Self::Lugo | Self::Ourense | Self::Pontevedra => {
                AutonomousCommunity::Galicia
            }
            Self::Almeria
            | Self::Cadiz
            | Self::Cordoba
            | Self::Granada
            | Self::Huelva
            | Self::Jaen
            | Self::Malaga
            | Self::Sevilla => AutonomousCommunity::Andalucia,
            Self::Asturias => AutonomousCommunity::Asturias,
            Self::Cantabria => AutonomousCommunity::Cantabria,
            Self::LaRioja => AutonomousCommunity::LaRioja,
            Self::Murcia => AutonomousCommunity::Murcia,
            Self::Alacant | Self::Castellon | Self::Valencia => AutonomousCommunity::Valencia,
            Self::Huesca | Self::Teruel | Self::Zaragoza => AutonomousCommunity::Aragon,
            Self::Albacete | Self::CiudadReal | Self::Cuenca | Self::Guadalajara | Self::Toledo => {
                AutonomousCommunity::CastillaLaMancha
            }
            Self::LasPalmas | Self::SantaCruz => AutonomousCommunity::Canarias,
            Self::Navarra => AutonomousCommunity::Navarra,
            Self::Badajoz | Self::Caceres => AutonomousCommunity::Extremadura,
            Self::Baleares => AutonomousCommunity::Baleares,
            Self::Madrid => AutonomousCommunity::Madrid,
            Self::Avila
            | Self::Burgos
            | Self::Leon
            | Self::Palencia
            | Self::Salamanca
            | Self::Segovia
            | Self::Soria
            | Self::Valladolid
            | Self::Zamora => AutonomousCommunity::CastillaLeon,
            Self::Ceuta => AutonomousCommunity::Ceuta,
            Self::Melilla => AutonomousCommunity::Melilla,
        }
    }

    /// Looks up a province by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    /// Returns all variants of this enum, in code order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Araba,
            Self::Albacete,
            Self::Alacant,
            Self::Almeria,
            Self::Avila,
            Self::Badajoz,
            Self::Baleares,
            Self::Barcelona,
            Self::Burgos,
            Self::Caceres,
            Self::Cadiz,
            Self::Castellon,
            Self::CiudadReal,
            Self::Cordoba,
            Self::ACoruna,
            Self::Cuenca,
            Self::Girona,
            Self::Granada,
            Self::Guadalajara,
            Self::Gipuzcoa,
            Self::Huelva,
            Self::Huesca,
            Self::Jaen,
            Self::Leon,
            Self::Lleida,
            Self::LaRioja,
            Self::Lugo,
            Self::Madrid,
            Self::Malaga,
            Self::Murcia,
            Self::Navarra,
            Self::Ourense,
            Self::Asturias,
            Self::Palencia,
            Self::LasPalmas,
            Self::Pontevedra,
            Self::Salamanca,
            Self::SantaCruz,
            Self::Cantabria,
            Self::Segovia,
            Self::Sevilla,
            Self::Soria,
            Self::Tarragona,
            Self::Teruel,
            Self::Toledo,
            Self::Valencia,
            Self::Valladolid,
            Self::Bizkaia,
            Self::Zamora,
            Self::Zaragoza,
            Self::Ceuta,
            Self::Melilla,
        ]
    }
}
