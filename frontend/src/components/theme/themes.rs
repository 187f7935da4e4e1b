use store::Themes;

/// Colors applied to elements carrying a theme class.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub bg_color: &'static str,
    pub contrast_bg_color: &'static str,
    pub text_color: &'static str,
    pub box_border_color: &'static str,
}

impl Palette {
    pub fn dark() -> Self {
        let light = "white";

        Self {
            bg_color: "#1B2430",
            contrast_bg_color: "#11171e",
            text_color: light,
            box_border_color: light,
        }
    }

    pub fn light() -> Self {
        let dark = "#212529";

        Self {
            bg_color: "#FEFCF3",
            contrast_bg_color: "#efede6",
            text_color: dark,
            box_border_color: dark,
        }
    }

    /// `None` stays unstyled.
    pub fn of(theme: Themes) -> Option<Self> {
        match theme {
            Themes::Dark => Some(Self::dark()),
            Themes::Light => Some(Self::light()),
            Themes::None => None,
        }
    }
}

/// Stylesheet with one rule set per styled theme class.
pub fn stylesheet() -> String {
    Themes::ALL
        .into_iter()
        .filter_map(|theme| Palette::of(theme).map(|palette| rules(theme, &palette)))
        .collect()
}

fn rules(theme: Themes, palette: &Palette) -> String {
    let class = theme.as_str();
    let Palette {
        bg_color,
        contrast_bg_color,
        text_color,
        box_border_color,
    } = palette;

    format!(
        "
        header.{class}, aside.{class}, main.{class} {{
            background-color: {bg_color};
            color: {text_color};
            border: 2px solid {box_border_color};
        }}
        header.{class} select {{
            background-color: {contrast_bg_color};
            color: {text_color};
        }}
        "
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_unstyled() {
        assert_eq!(Palette::of(Themes::None), None);

        let css = stylesheet();
        assert!(!css.contains(".none"));
    }

    #[test]
    fn every_styled_theme_has_rules() {
        let css = stylesheet();
        for theme in [Themes::Dark, Themes::Light] {
            assert!(css.contains(&format!("aside.{}", theme.as_str())), "{css}");
            let palette = Palette::of(theme).unwrap();
            assert!(css.contains(palette.bg_color), "{css}");
        }
    }
}
