// Static portfolio content
// Plain data for the page sections and the topic dashboards. Nothing here is
// interpreted by the engine; dashboard() is the only lookup it uses.

use crate::engine::dispatch::Topic;

pub const NAME_FIRST: &str = "Ranga Bharath";
pub const NAME_LAST: &str = "Kumar";

pub const ROLES: [&str; 2] = ["Cybersecurity Student", "Java Developer"];

pub const BIO: &str = "Hey there, fellow tech enthusiast! I'm a CSE student specializing in \
cybersecurity, and I'm totally immersed in the world of machine learning with Python and Java. \
My mission? To craft systems that are not only secure but also intelligent. I'm pumped to \
collaborate on projects that break new ground. Let's combine our talents and create something \
truly extraordinary!";

pub const RESUME_URL: &str =
    "https://github.com/rangabharathkumar/Resume/blob/main/Ranga_Bharath_kumar_Resume.pdf";

pub const LEETCODE_URL: &str = "https://leetcode.com/u/rangabharathkumar/";
pub const HACKERRANK_URL: &str = "https://www.hackerrank.com/profile/rangabharathkum1";

pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [Link; 3] = [
    Link { label: "GitHub", url: "https://github.com/rangabharathkumar" },
    Link { label: "LinkedIn", url: "https://linkedin.com/in/ranga-bharath-kumar" },
    Link { label: "Email", url: "mailto:rangabharathkumar1@gmail.com" },
];

/// In-page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const NAV: [Section; 4] = [Section::Skills, Section::Projects, Section::Education, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }
}

// ============================================================================
// SKILLS
// ============================================================================

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub description: &'static str,
}

pub const SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        title: "Programming Languages",
        skills: &["Java", "Python"],
        description: "Core programming languages for backend and ML development",
    },
    SkillCategory {
        title: "Machine Learning Frameworks",
        skills: &["TensorFlow", "PyTorch"],
        description: "Building AI models for healthcare predictions and autonomous systems",
    },
    SkillCategory {
        title: "Libraries & Tools",
        skills: &["NumPy", "Pandas", "Scikit-learn", "OpenCV", "Git", "FastAPI"],
        description: "Essential tools for data science and software development",
    },
    SkillCategory {
        title: "Cloud Platforms",
        skills: &["AWS (Basic)", "Render"],
        description: "Cloud deployment and hosting solutions",
    },
];

// ============================================================================
// EDUCATION
// ============================================================================

pub struct Education {
    pub degree: &'static str,
    pub specialization: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub current: bool,
    pub achievements: &'static [&'static str],
    pub grade: &'static str,
}

pub const EDUCATION: [Education; 3] = [
    Education {
        degree: "Integrated MTech Computer Science and Engineering",
        specialization: "Cybersecurity Specialization",
        institution: "VIT Bhopal University",
        location: "Bhopal",
        period: "Oct 2022 – Ongoing",
        current: true,
        achievements: &[
            "Specialized in Cybersecurity applications",
            "Working on ML and Blockchain projects",
            "Active member of Mozilla Firefox Club",
            "Top 5 projects at VIT Bhopal Project Expo",
        ],
        grade: "Pursuing",
    },
    Education {
        degree: "Class XII",
        specialization: "Science Stream",
        institution: "Sri Chaitanya Kalasala",
        location: "Hyderabad",
        period: "Jun 2020 – March 2022",
        current: false,
        achievements: &[
            "Strong foundation in Mathematics and Science",
            "State level sports participation",
            "Leadership in school activities",
        ],
        grade: "Completed",
    },
    Education {
        degree: "Class X",
        specialization: "CBSE Board",
        institution: "Sri Chaitanya School",
        location: "Hyderabad",
        period: "Jun 2018 – Mar 2020",
        current: false,
        achievements: &[
            "Academic excellence in core subjects",
            "Represented school in state tournaments",
            "Active in extracurricular activities",
        ],
        grade: "Completed",
    },
];

pub struct Certification {
    pub title: &'static str,
    pub provider: &'static str,
    pub year: &'static str,
    pub kind: &'static str,
    pub verify_url: Option<&'static str>,
}

pub const CERTIFICATIONS: [Certification; 1] = [Certification {
    title: "The Bits and Bytes Computer Networking",
    provider: "Coursera",
    year: "2024",
    kind: "Professional Certificate",
    verify_url: Some("https://www.coursera.org/account/accomplishments/verify/BSUPAHER96A5"),
}];

// ============================================================================
// PROJECTS
// ============================================================================

pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub github: &'static str,
    pub kind: &'static str,
    pub team_size: u32,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Blockchain-based Secure Data Sharing Platform",
        subtitle: "PriveX 3.0",
        description: "Built a decentralized system enabling tamper-proof data sharing using \
            blockchain technology. Led frontend development with React and smart contract \
            integration using Solidity.",
        period: "Jan 2024 – May 2024",
        technologies: &["React.js", "Solidity", "MetaMask", "Blockchain", "Web3"],
        achievements: &[
            "Led 5-member team to functional prototype",
            "Immutable transaction auditing",
            "Top 5 projects at VIT Bhopal Project Expo",
            "Decentralized architecture implementation",
        ],
        github: "https://github.com/rangabharathkumar/PriveX_3.0-A-Blockchain-based-secure-data-sharing-platform",
        kind: "Blockchain",
        team_size: 5,
    },
    Project {
        title: "Health Oracle",
        subtitle: "AI-Powered Disease Prediction System",
        description: "Developed an AI-powered mobile app analyzing wearable data to predict \
            diseases with personalized health insights. Led ML model development and integration \
            for real-time health risk assessment.",
        period: "July 2024 – Mar 2025",
        technologies: &["React Native", "Machine Learning", "FastAPI", "TensorFlow", "Python", "AI"],
        achievements: &[
            "Real-time health risk assessment",
            "Personalized health insights",
            "Managed 8-member team",
            "Full project lifecycle management",
        ],
        github: "https://github.com/rangabharathkumar/health_oracle_2",
        kind: "Machine Learning",
        team_size: 8,
    },
    Project {
        title: "Autonomous Disaster Response UAV",
        subtitle: "AeroTHON 2025 Hackathon Project",
        description: "Developed a real-time object detection system using YOLOv8 for disaster \
            classification and payload targeting. Implemented multi-threaded perception system \
            for obstacle avoidance.",
        period: "July 2024 – Mar 2025",
        technologies: &["Python", "YOLOv8", "MAVSDK", "OpenCV", "Raspberry Pi", "Computer Vision"],
        achievements: &[
            "Real-time object detection system",
            "Multi-threaded perception system",
            "Autonomous decision-making logic",
            "Disaster classification & targeting",
        ],
        github: "https://github.com/rangabharathkumar/something",
        kind: "Computer Vision",
        team_size: 4,
    },
];

// ============================================================================
// CONTACT
// ============================================================================

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    /// `None` for entries that are display-only.
    pub href: Option<&'static str>,
}

pub const CONTACT: [ContactInfo; 3] = [
    ContactInfo {
        label: "Email",
        value: "rangabharathkumar1@gmail.com",
        href: Some("mailto:rangabharathkumar1@gmail.com"),
    },
    ContactInfo {
        label: "Phone",
        value: "+91 6304300048",
        href: Some("tel:+916304300048"),
    },
    ContactInfo { label: "Location", value: "Bhopal, India", href: None },
];

pub const CONTACT_BLURB: &str =
    "Open to opportunities in cybersecurity, machine learning, and full-stack development";

// ============================================================================
// DASHBOARDS
// ============================================================================

pub struct LanguageShare {
    pub language: &'static str,
    pub percent: u8,
    pub color: [u8; 3],
}

pub struct Repo {
    pub name: &'static str,
    pub description: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub language: &'static str,
    pub url: &'static str,
}

pub struct StatBlock {
    pub site: &'static str,
    pub url: &'static str,
    pub stats: &'static [(&'static str, &'static str)],
    pub badges: &'static [&'static str],
}

pub struct CodingDashboard {
    /// Third-party badge images (contribution chart, stats, streak).
    pub badges: &'static [Link],
    pub languages: &'static [LanguageShare],
    pub stat_blocks: &'static [StatBlock],
    pub repos: &'static [Repo],
}

pub struct LearningStatus {
    pub learning: &'static str,
    pub focus: &'static str,
    pub progress: f32,
    pub next_goal: &'static str,
    pub last_updated: &'static str,
    pub tracks: &'static [(&'static str, &'static str)],
}

pub const CODING: CodingDashboard = CodingDashboard {
    badges: &[
        Link {
            label: "GitHub Contribution Calendar",
            url: "https://ghchart.rshah.org/1a237e/rangabharathkumar",
        },
        Link {
            label: "GitHub Stats",
            url: "https://github-readme-stats-sigma-five.vercel.app/api?username=rangabharathkumar&show_icons=true&theme=dark&hide_border=true&count_private=true",
        },
        Link {
            label: "GitHub Streak Stats",
            url: "https://github-readme-streak-stats.herokuapp.com/?user=rangabharathkumar&theme=dark&hide_border=true&background=00000000",
        },
    ],
    languages: &[
        LanguageShare { language: "JavaScript", percent: 35, color: [0xf7, 0xdf, 0x1e] },
        LanguageShare { language: "Python", percent: 25, color: [0x37, 0x76, 0xab] },
        LanguageShare { language: "Java", percent: 20, color: [0xed, 0x8b, 0x00] },
        LanguageShare { language: "TypeScript", percent: 15, color: [0x31, 0x78, 0xc6] },
        LanguageShare { language: "Others", percent: 5, color: [0x6b, 0x72, 0x80] },
    ],
    stat_blocks: &[
        StatBlock {
            site: "LeetCode",
            url: LEETCODE_URL,
            stats: &[
                ("Problems solved", "50+"),
                ("Contest rating", "1400+"),
                ("Current streak", "15 days"),
            ],
            badges: &["Problem Solver", "Contest Participant"],
        },
        StatBlock {
            site: "HackerRank",
            url: HACKERRANK_URL,
            stats: &[("Skills", "Python, Java, Problem Solving")],
            badges: &["Gold Badge - Python", "Silver Badge - Java"],
        },
        StatBlock {
            site: "GitHub",
            url: "https://github.com/rangabharathkumar",
            stats: &[
                ("Repositories", "15+"),
                ("Stars", "25+"),
                ("Languages", "Python, Java, JavaScript, Solidity"),
            ],
            badges: &[],
        },
    ],
    repos: &[
        Repo {
            name: "blockchain-secure-data-sharing",
            description: "Decentralized system for tamper-proof data sharing",
            stars: 8,
            forks: 3,
            language: "Solidity",
            url: "https://github.com/rangabharathkumar/PriveX_3.0-A-Blockchain-based-secure-data-sharing-platform",
        },
        Repo {
            name: "health-oracle",
            description: "AI-powered health prediction mobile app",
            stars: 12,
            forks: 5,
            language: "Python",
            url: "https://github.com/rangabharathkumar/health_oracle_2",
        },
        Repo {
            name: "autonomous-disaster-uav",
            description: "Real-time object detection for disaster response",
            stars: 6,
            forks: 2,
            language: "Python",
            url: "https://github.com/rangabharathkumar/something",
        },
    ],
};

pub const STATUS: LearningStatus = LearningStatus {
    learning: "Advanced Machine Learning Algorithms",
    focus: "Deep Learning & Neural Networks",
    progress: 0.85,
    next_goal: "Computer Vision Specialization",
    last_updated: "January 2025",
    tracks: &[
        (
            "Data Structures & Algorithms with Java",
            "Deep diving into fundamental computer science concepts, focusing on efficient \
             problem-solving techniques.",
        ),
        (
            "Machine Learning Exploration",
            "Exploring advanced ML concepts and practical applications in cybersecurity.",
        ),
    ],
};

/// Static content for an open panel.
pub enum Dashboard {
    Coding(&'static CodingDashboard),
    Certification(&'static [Certification]),
    Status(&'static LearningStatus),
}

impl Dashboard {
    pub fn title(&self) -> &'static str {
        match self {
            Dashboard::Coding(_) => "Coding Dashboard",
            Dashboard::Certification(_) => "Certifications",
            Dashboard::Status(_) => "Current Learning Status",
        }
    }
}

pub fn dashboard(topic: Topic) -> Dashboard {
    match topic {
        Topic::Coding => Dashboard::Coding(&CODING),
        Topic::Certification => Dashboard::Certification(&CERTIFICATIONS),
        Topic::Status => Dashboard::Status(&STATUS),
    }
}
