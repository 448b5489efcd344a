/// One of the organization's six pillars
#[derive(Debug, Clone, PartialEq)]
pub struct Pillar {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Static content of the "about us" tab
#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub mission: &'static str,
    pub vision: &'static str,
    pub pillars: [Pillar; 6],
}

impl AboutContent {
    /// The chapter's about-page content
    pub fn chapter() -> Self {
        Self {
            mission: "Engage UTEP and El Paso students through academic, leadership, \
                      professional, and service opportunities in support of their growth \
                      as STEM professionals.",
            vision: "To be the model organization that develops socially responsible STEM \
                     professionals who make a lasting impact and serve as role models \
                     within their communities.",
            pillars: [
                Pillar {
                    id: "academic",
                    title: "Academic Development",
                    description: "Supporting students with resources and mentorship to \
                                  excel academically.",
                },
                Pillar {
                    id: "career",
                    title: "Career Development",
                    description: "Building community and inclusivity through events that \
                                  strengthen chapter culture.",
                },
                Pillar {
                    id: "community",
                    title: "Community Outreach",
                    description: "Giving back to El Paso through volunteering and STEM \
                                  education initiatives.",
                },
                Pillar {
                    id: "leadership",
                    title: "Leadership Development",
                    description: "Providing opportunities for members to grow into \
                                  confident, capable leaders.",
                },
                Pillar {
                    id: "professional",
                    title: "Professional Development",
                    description: "Connecting students to industry professionals and \
                                  career resources.",
                },
                Pillar {
                    id: "technical",
                    title: "Technical Development",
                    description: "Cultivating technical skills through workshops, coding \
                                  projects, and innovation labs.",
                },
            ],
        }
    }
}
