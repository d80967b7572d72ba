/// Decoding of raw presentation values into canonical card attributes.
///
/// The collaborator that scrapes the board hands us, per card, the raw
/// strings it found: the stroke color (an rgb() triple or a hex value in
/// colorblind mode), the fill attribute for the shading, the symbol class
/// for the shape, and the symbol count. Everything must map to a canonical
/// value before the solver sees it; an unknown token is a fatal decode
/// error, never a silent mismatch.

use serde::Deserialize;
use thiserror::Error;

use crate::card::{Card, CardPool, Color, Shading};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown color value '{0}'")]
    UnknownColor(String),
    #[error("unknown shading value '{0}'")]
    UnknownShading(String),
    #[error("invalid symbol count '{0}' (expected 1, 2 or 3)")]
    BadCount(String),
}

/// One card as captured from the presentation layer, before decoding.
/// The count arrives as an integer-as-string ("1".."3").
#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    pub color: String,
    pub shape: String,
    pub shading: String,
    pub count: String,
}

fn color_from_raw(raw: &str) -> Result<Color, DecodeError> {
    let color = match raw {
        "rgb(0, 178, 89)" => Color::Green,
        "rgb(73, 47, 146)" => Color::Purple,
        "rgb(239, 62, 66)" => Color::Red,
        // Colorblind friendly mode colors
        "#37AFA9" => Color::Turquoise,
        "#DF6747" => Color::Orange,
        "#FEBC38" => Color::Yellow,
        _ => return Err(DecodeError::UnknownColor(raw.to_string())),
    };
    Ok(color)
}

fn shading_from_raw(raw: &str) -> Result<Shading, DecodeError> {
    // A solid symbol is filled with the stroke color, an empty one has no
    // fill, a striped one is filled with a stripe pattern.
    let shading = match raw {
        "rgb(0, 178, 89)" | "rgb(73, 47, 146)" | "rgb(239, 62, 66)" => Shading::Solid,
        "#37AFA9" | "#DF6747" | "#FEBC38" => Shading::Solid,
        "none" => Shading::Empty,
        "url(#green-stripes)" | "url(#purple-stripes)" | "url(#red-stripes)" => Shading::Striped,
        _ => return Err(DecodeError::UnknownShading(raw.to_string())),
    };
    Ok(shading)
}

fn count_from_raw(raw: &str) -> Result<u8, DecodeError> {
    match raw.parse::<u8>() {
        Ok(n) if (1..=3).contains(&n) => Ok(n),
        _ => Err(DecodeError::BadCount(raw.to_string())),
    }
}

/// Decode one raw card into its canonical form.
pub fn decode_card(raw: &RawCard) -> Result<Card, DecodeError> {
    Ok(Card {
        color: color_from_raw(&raw.color)?,
        shape: raw.shape.clone(),
        shading: shading_from_raw(&raw.shading)?,
        count: count_from_raw(&raw.count)?,
    })
}

/// Decode a whole board. Fails on the first bad card: the session cannot
/// proceed with a partially decoded pool.
pub fn decode_pool(raw_cards: &[RawCard]) -> Result<CardPool, DecodeError> {
    let mut cards = Vec::with_capacity(raw_cards.len());
    for raw in raw_cards {
        cards.push(decode_card(raw)?);
    }
    Ok(CardPool::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(color: &str, shape: &str, shading: &str, count: &str) -> RawCard {
        RawCard {
            color: color.to_string(),
            shape: shape.to_string(),
            shading: shading.to_string(),
            count: count.to_string(),
        }
    }

    #[test]
    fn decodes_standard_mode_card() {
        let card = decode_card(&raw("rgb(0, 178, 89)", "oval", "none", "2")).unwrap();
        assert_eq!(card.color, Color::Green);
        assert_eq!(card.shape, "oval");
        assert_eq!(card.shading, Shading::Empty);
        assert_eq!(card.count, 2);
    }

    #[test]
    fn decodes_colorblind_mode_card() {
        let card =
            decode_card(&raw("#37AFA9", "squiggle", "url(#purple-stripes)", "3")).unwrap();
        assert_eq!(card.color, Color::Turquoise);
        assert_eq!(card.shading, Shading::Striped);
    }

    #[test]
    fn solid_shading_from_any_color_fill() {
        for fill in ["rgb(239, 62, 66)", "#FEBC38"] {
            let card = decode_card(&raw("rgb(239, 62, 66)", "diamond", fill, "1")).unwrap();
            assert_eq!(card.shading, Shading::Solid);
        }
    }

    #[test]
    fn unknown_color_is_rejected_with_the_raw_token() {
        let err = decode_card(&raw("rgb(1, 2, 3)", "oval", "none", "1")).unwrap_err();
        assert_eq!(err, DecodeError::UnknownColor("rgb(1, 2, 3)".to_string()));
    }

    #[test]
    fn unknown_shading_is_rejected() {
        let err =
            decode_card(&raw("rgb(0, 178, 89)", "oval", "url(#plaid)", "1")).unwrap_err();
        assert_eq!(err, DecodeError::UnknownShading("url(#plaid)".to_string()));
    }

    #[test]
    fn out_of_range_count_is_rejected() {
        for bad in ["0", "4", "two", ""] {
            let err = decode_card(&raw("rgb(0, 178, 89)", "oval", "none", bad)).unwrap_err();
            assert_eq!(err, DecodeError::BadCount(bad.to_string()));
        }
    }

    #[test]
    fn decode_pool_fails_fast_on_first_bad_card() {
        let raws = vec![
            raw("rgb(0, 178, 89)", "oval", "none", "1"),
            raw("hotpink", "oval", "none", "1"),
            raw("also-bad", "oval", "none", "1"),
        ];
        let err = decode_pool(&raws).unwrap_err();
        assert_eq!(err, DecodeError::UnknownColor("hotpink".to_string()));
    }
}
