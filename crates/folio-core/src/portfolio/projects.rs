use crate::normalize::normalize;
use serde::Serialize;

/// Logo assets shown as project icons.
pub mod icons {
    pub const PYTHON: &str = "assets/logos/Python-logo.svg";
    pub const JAVA: &str = "assets/logos/Java-logo.svg";
    pub const POSTHOG: &str = "assets/logos/posthog-logo.svg";
    pub const POSTGRES: &str = "assets/logos/Postgres-logo.svg";
}

const VIEW_REPO: &str = "View Repo →";

/// Separator between items of [`Project::tech_stack`].
pub const STACK_SEPARATOR: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub tech_stack: &'static str,
    pub description: &'static str,
    pub cta_text: &'static str,
    pub cta_link: &'static str,
    /// Logo asset path, e.g. `assets/logos/Python-logo.svg`.
    pub icon: &'static str,
}

impl Project {
    pub fn tech_stack_items(&self) -> impl Iterator<Item = &'static str> {
        self.tech_stack
            .split(STACK_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Case-insensitive match against one tech stack item.
    pub fn uses(&self, tech: &str) -> bool {
        self.tech_stack_items()
            .any(|item| item.eq_ignore_ascii_case(tech.trim()))
    }

    /// Display name of the project's icon, as the logo catalog would show it.
    pub fn icon_name(&self) -> String {
        normalize(self.icon)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "When Was the Golden Era of Video Games?",
        tech_stack: "Python • SQL • Jupyter Notebook",
        description: "Analyzing critic/user scores & sales of 400 top games (1977–2017) with PostgreSQL.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/When-Was-the-Golden-Era-of-Video-Games-DataCamp",
        icon: icons::POSTGRES,
    },
    Project {
        title: "Analyzing Students Mental Health",
        tech_stack: "Python • SQL • Analytics",
        description: "Analyzing mental health survey data from 286 students to assess depression risk.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Analyzing-Students-Mental-Health-DataCamp",
        icon: icons::POSTGRES,
    },
    Project {
        title: "Predicting Movie Rental Durations",
        tech_stack: "Python • Scikit-Learn • Random Forest",
        description: "Regression project to forecast DVD rental length using Linear, Ridge, Decision Tree & Random Forest models.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Predicting-Movie-Rental-Durations-DataCamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Clustering Antarctic Penguin Species",
        tech_stack: "Python • K-Means • Clustering",
        description: "Unsupervised machine learning project using K-Means clustering to identify distinct penguin species.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Clustering-Antarctic-Penguin-Species-DataCamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Predictive Modeling for Agriculture",
        tech_stack: "Python • Scikit-Learn • Classification",
        description: "Machine learning project that helps farmers choose the best crop based on soil metrics.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Predictive-Modeling-for-Agriculture-DataCamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Hypothesis Testing: Soccer Matches",
        tech_stack: "Python • Hypothesis Testing • Pandas",
        description: "Hypothesis test on FIFA World Cup matches to compare goal totals in men's vs women's soccer.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Hypothesis-Testing-with-Men-s-and-Women-s-Soccer-Matches-DataCamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Car Insurance Claim Modeling",
        tech_stack: "Python • Logistic Regression • Machine Learning",
        description: "Predictive model to identify features impacting car insurance claims using logistic regression.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Modeling-Car-Insurance-Claim-Outcomes-DataCamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Exploring Airbnb Market Trends",
        tech_stack: "Python • Pandas • Data Cleaning",
        description: "Analyzing prices, reviews, and room types in NYC’s rental market using pandas.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Exploring-Airbnb-Market-Trends-Datacamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Customer Analytics: Preparing Data",
        tech_stack: "Python • Data Manipulation • Optimization",
        description: "Prepare customer data for modeling by converting data types and optimizing memory usage.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Customer-Analytics-Preparing-Data-for-Modeling-Datacamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Analyzing Crime in Los Angeles",
        tech_stack: "Python • Data Analysis • Pandas",
        description: "Identify peak crime hours, high-risk locations, and age group trends in Los Angeles.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Analyzing-Crime-in-Los-Angeles-Datacamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "History of Nobel Prize Winners",
        tech_stack: "Python • Data Visualization • Pandas",
        description: "Explore Nobel Prize data (1901–2023) to analyzing gender, nationality, and category trends.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Visualizing-the-History-of-Nobel-Prize-Winners-DataCamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "NYC Public School Test Scores",
        tech_stack: "Python • EDA • Statistics",
        description: "Analyze SAT scores across NYC public high schools to find borough-wise variability.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Exploring-NYC-Public-School-Test-Result-Scores-Datacamp",
        icon: icons::PYTHON,
    },
    Project {
        title: "Investigating Netflix Movies",
        tech_stack: "Python • EDA • Pandas",
        description: "Exploratory data analysis of 1990s Netflix movies focusing on durations and genres.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Investigating-Netflix-Movies-DataCamp-",
        icon: icons::PYTHON,
    },
    Project {
        title: "Java Task Tracker",
        tech_stack: "Java • CLI • JSON",
        description: "Lightweight command-line task manager using JSON for storage.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Java_Task-Tracker",
        icon: icons::JAVA,
    },
    Project {
        title: "UIT bachlor Final Project (DAMSO_STREAM)",
        tech_stack: "Python • Flask • Web App",
        description: "Web application for selling digital products with role-based access control.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/UIT_Final_Project",
        icon: icons::PYTHON,
    },
    Project {
        title: "Java Simple Chat App",
        tech_stack: "Java • Socket Programming • Swing",
        description: "Simple Chat App in Java using Socket Programming and Swing GUI.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/JavaSimpleChatApp_v0_One_Sided",
        icon: icons::JAVA,
    },
    Project {
        title: "EdiMyDar - Android To-Do App",
        tech_stack: "Java • Android • Firebase • AI",
        description: "Android To-Do app with Firebase Auth, Firestore, and Gemini AI integration.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/EdiMyDar",
        icon: icons::JAVA,
    },
    Project {
        title: "CS50 Problem Sets",
        tech_stack: "C • Python • SQL",
        description: "My personal solutions to CS50 problem sets written in various programming languages.",
        cta_text: VIEW_REPO,
        cta_link: "https://github.com/AchrafSL/Cs50_ProblemSets_Repo",
        icon: icons::POSTHOG,
    },
];
