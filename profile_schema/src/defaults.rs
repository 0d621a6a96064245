//! Built-in profile
//!
//! Shown on first start and restored by "reset to default".

use crate::document::{
    Certification, ContactInfo, Education, ProfileDocument, Project, ProjectLinks, SkillCategory,
};

fn education(degree: &str, institution: &str, year: &str, score: &str) -> Education {
    Education {
        degree: degree.into(),
        institution: institution.into(),
        year: year.into(),
        score: score.into(),
    }
}

fn certification(name: &str, date: &str) -> Certification {
    Certification {
        name: name.into(),
        date: date.into(),
    }
}

/// Returns the built-in profile document
pub fn default_document() -> ProfileDocument {
    ProfileDocument {
        name: "ALEX MORGAN".into(),
        role: "Computer Science & Engineering Student".into(),
        contact: ContactInfo {
            email: "alex.morgan@example.com".into(),
            phone: "+1-555-0100".into(),
            location: "12 Harbour Lane, Springfield".into(),
        },
        objective: "Computer science student with a strong foundation in data structures, \
                    algorithms and full-stack web development. Enjoys building tools people \
                    actually use and is looking for projects where design and engineering meet."
            .into(),
        education: vec![
            education(
                "Bachelor of Engineering in Computer Science & Engineering",
                "Springfield Institute of Technology",
                "2023 – 2027",
                "Current CGPA: 8.8/10.0",
            ),
            education(
                "Pre-University Course (Science)",
                "Riverside PU College",
                "2023",
                "Percentage: 93.33%",
            ),
            education(
                "Secondary School Leaving Certificate",
                "Hillview Public School",
                "2021",
                "Percentage: 98.08%",
            ),
        ],
        skills: vec![
            SkillCategory::new("Programming Languages", "C, C++, Java, JavaScript, Rust"),
            SkillCategory::new(
                "Web Development",
                "HTML5, CSS3, React.js, RESTful APIs, Responsive Design",
            ),
            SkillCategory::new(
                "Core Competencies",
                "Data Structures & Algorithms, Object-Oriented Programming, UI/UX Design",
            ),
            SkillCategory::new("Development Tools", "Git/GitHub, VS Code, Postman, Netlify"),
            SkillCategory::new("Design Tools", "Figma, Canva"),
            SkillCategory::new("Operating Systems", "Linux, Windows"),
        ],
        projects: vec![
            Project {
                title: "CareQueue – Clinic Appointment Platform".into(),
                tech_stack: "React.js, PostgreSQL, REST APIs".into(),
                description: "Appointment booking with a live clinic locator, document upload \
                              and emergency contact management."
                    .into(),
                links: None,
                award: None,
            },
            Project {
                title: "WordNest – Reading Games for Children".into(),
                tech_stack: "HTML, CSS, JavaScript".into(),
                description: "Interactive quizzes with text-to-speech and translation helpers."
                    .into(),
                links: None,
                award: Some("Winner, Campus Hack Day 2024".into()),
            },
            Project {
                title: "TextKit – Text Processing Toolbox".into(),
                tech_stack: "React.js".into(),
                description: "Case conversion, word and character counts, text-to-speech and a \
                              dark mode."
                    .into(),
                links: Some(ProjectLinks {
                    github: Some("github.com/alexmorgan/textkit".into()),
                    live: Some("alexmorgan.github.io/textkit".into()),
                }),
                award: None,
            },
            Project {
                title: "Portfolio Website".into(),
                tech_stack: "HTML, CSS, JavaScript".into(),
                description: "Responsive personal portfolio showcasing skills and projects."
                    .into(),
                links: Some(ProjectLinks {
                    github: None,
                    live: Some("alexmorgan.example.com".into()),
                }),
                award: None,
            },
        ],
        certifications: vec![
            certification("Data Structures & Algorithms – Online Academy", "May 2025"),
            certification("Responsive Web Design Certification", "February 2025"),
            certification("Elements of Artificial Intelligence", "January 2025"),
            certification("Programming in C++ – Online Academy", "November 2024"),
            certification("Linux for Beginners – Online Academy", "September 2024"),
            certification("Winner – Campus Hack Day 2024", "May 2024"),
        ],
        languages: "English, Spanish".into(),
        interests: "Problem Solving, UI/UX Design, Open Source Contribution".into(),
    }
}
