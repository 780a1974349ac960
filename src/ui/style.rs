/// Container styles for the gallery, loosely following a slate/indigo palette.
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const SLATE_200: Color = Color {
    r: 0.886,
    g: 0.910,
    b: 0.941,
    a: 1.0,
};
pub const SLATE_300: Color = Color {
    r: 0.796,
    g: 0.835,
    b: 0.882,
    a: 1.0,
};
pub const SLATE_500: Color = Color {
    r: 0.392,
    g: 0.455,
    b: 0.545,
    a: 1.0,
};
pub const SLATE_600: Color = Color {
    r: 0.278,
    g: 0.333,
    b: 0.412,
    a: 1.0,
};
pub const SLATE_700: Color = Color {
    r: 0.200,
    g: 0.255,
    b: 0.333,
    a: 1.0,
};
pub const SLATE_800: Color = Color {
    r: 0.118,
    g: 0.161,
    b: 0.231,
    a: 1.0,
};
pub const INDIGO_600: Color = Color {
    r: 0.310,
    g: 0.275,
    b: 0.898,
    a: 1.0,
};
pub const BLUE_50: Color = Color {
    r: 0.937,
    g: 0.965,
    b: 1.0,
    a: 1.0,
};
pub const BLUE_800: Color = Color {
    r: 0.118,
    g: 0.251,
    b: 0.686,
    a: 1.0,
};

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.933, 0.949, 1.0))),
        ..container::Style::default()
    }
}

pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.8))),
        border: Border {
            color: SLATE_200,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SLATE_800)),
        text_color: Some(SLATE_300),
        ..container::Style::default()
    }
}

/// Card frame; hovered cards lift with a deeper shadow and an accent border
pub fn card(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: if hovered { INDIGO_600 } else { SLATE_200 },
            width: if hovered { 2.0 } else { 1.0 },
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, if hovered { 0.25 } else { 0.1 }),
            offset: Vector::new(0.0, if hovered { 12.0 } else { 4.0 }),
            blur_radius: if hovered { 28.0 } else { 12.0 },
        },
        ..container::Style::default()
    }
}

/// Stand-in shown until a thumbnail has loaded
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SLATE_200)),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Darkened band behind the hover caption
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.55))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.8))),
        ..container::Style::default()
    }
}

pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 24.0),
            blur_radius: 48.0,
        },
        ..container::Style::default()
    }
}

pub fn image_well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SLATE_200)),
        ..container::Style::default()
    }
}

pub fn title_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.45))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

pub fn tip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLUE_50)),
        text_color: Some(BLUE_800),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
