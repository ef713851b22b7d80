use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Study {
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static STUDIES: &[Study] = &[
    Study {
        title: "Master’s Student in Big Data, AI & Advanced Applications",
        institution: "Ibn Tofail University",
        description: "Specializing in Big Data technologies, Artificial Intelligence, and advanced software applications.",
        tags: &[
            "Big Data",
            "Artificial Intelligence",
            "Advanced Applications",
            "Machine Learning",
        ],
    },
    Study {
        title: "Bachelor of Mathematics and Computer Science",
        institution: "Ibn Tofail University",
        description: "Graduated with a strong foundation in Computer Science and Mathematics.",
        tags: &[
            "Computer Science",
            "Mathematics",
            "Algorithms",
            "Data Structures",
        ],
    },
];
