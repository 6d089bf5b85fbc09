/// Reference logo used to exercise a balanced lane.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampleLogo {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Natural width / natural height.
    pub ratio: f64,
}

/// Mix of wide, tall and near-square marks.
pub const SAMPLE_LOGOS: [SampleLogo; 5] = [
    SampleLogo {
        id: "stripe",
        name: "Stripe",
        ratio: 2.393,
    },
    SampleLogo {
        id: "tall-mark",
        name: "Tall",
        ratio: 0.35,
    },
    SampleLogo {
        id: "airbnb",
        name: "Airbnb",
        ratio: 0.929,
    },
    SampleLogo {
        id: "wide-mark",
        name: "Wide",
        ratio: 5.0,
    },
    SampleLogo {
        id: "figma",
        name: "Figma",
        ratio: 0.675,
    },
];
