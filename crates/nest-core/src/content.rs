//! Marketing & Legal Copy
//!
//! Static text rendered by the landing page and the legal routes.

use serde::Serialize;

pub const SUPPORT_EMAIL: &str = "info@diasporanest.com.ng";

/// Days within which a refund may be requested
pub const REFUND_WINDOW_DAYS: u32 = 7;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
    /// Initials used when the photo is unavailable
    pub avatar: &'static str,
    pub photo: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡️",
        title: "Verified Properties",
        description: "All listings verified by our expert team with comprehensive due diligence",
    },
    Feature {
        icon: "🏢",
        title: "Premium Locations",
        description: "Exclusive access to prime real estate in Nigeria's most sought-after areas",
    },
    Feature {
        icon: "👥",
        title: "Trusted Agents",
        description: "Connect with certified professionals with proven track records",
    },
    Feature {
        icon: "📍",
        title: "Location Intelligence",
        description: "Detailed neighborhood insights, maps, and investment analytics",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Okafor",
        location: "London, UK",
        text: "DiasporaNest helped me secure my dream property in Lekki. The verification process gave me complete confidence in my investment.",
        rating: 5,
        avatar: "JO",
        photo: Some("https://res.cloudinary.com/dc5qncppu/image/upload/v1746003572/elegant-man-suit_mcbngu.jpg"),
    },
    Testimonial {
        name: "Kanu Nwosu",
        location: "Toronto, Canada",
        text: "Finally, a platform I can trust for Nigerian real estate. The agent connections and property verification are invaluable.",
        rating: 5,
        avatar: "KN",
        photo: Some("https://res.cloudinary.com/dc5qncppu/image/upload/v1746003555/11434191_chbm6b.png"),
    },
    Testimonial {
        name: "Funmi Adeleke",
        location: "New York, USA",
        text: "The quality of listings and detailed information saved me months of research. Worth every naira invested!",
        rating: 5,
        avatar: "FA",
        photo: Some("https://res.cloudinary.com/dc5qncppu/image/upload/v1749290957/confident-business-woman-portrait-smiling-face_ok89qv.jpg"),
    },
];

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "Why is there a one-time access fee?",
        answer: "The ₦25,000 fee ensures we maintain a curated, high-quality platform with verified listings and professional agents, while keeping out spam and low-quality listings. This investment model allows us to provide premium service quality.",
    },
    Faq {
        question: "Are all properties verified?",
        answer: "Yes, every property undergoes our rigorous verification process including title document checks, agent vetting, physical property verification, and legal compliance reviews.",
    },
    Faq {
        question: "Can I get a refund if I'm not satisfied?",
        answer: "We offer a 7-day satisfaction guarantee. If you're not completely satisfied with the quality of our listings and service, we'll provide a full refund, no questions asked.",
    },
    Faq {
        question: "How do I contact property agents?",
        answer: "Each listing includes verified agent contact information with direct WhatsApp links, phone numbers, and email addresses for immediate communication and property inquiries.",
    },
];

/// Bullet points in the pricing card
pub const PRICING_POINTS: [&str; 5] = [
    "Access to 500+ verified properties",
    "Direct agent contact information",
    "Property documents & legal information",
    "Google Maps integration & location insights",
    "7-day money-back guarantee",
];

/// One heading plus either a paragraph or a bullet list
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraph: Option<&'static str>,
    pub bullets: &'static [&'static str],
}

impl LegalSection {
    const fn text(heading: &'static str, paragraph: &'static str) -> Self {
        Self { heading, paragraph: Some(paragraph), bullets: &[] }
    }

    const fn list(heading: &'static str, bullets: &'static [&'static str]) -> Self {
        Self { heading, paragraph: None, bullets }
    }
}

const CONTACT_US: &str = "If you have any questions, please contact us at info@diasporanest.com.ng.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalPage {
    PrivacyPolicy,
    TermsOfService,
    RefundPolicy,
}

impl LegalPage {
    pub const ALL: [LegalPage; 3] = [
        LegalPage::PrivacyPolicy,
        LegalPage::TermsOfService,
        LegalPage::RefundPolicy,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            LegalPage::PrivacyPolicy => "/privacy-policy",
            LegalPage::TermsOfService => "/terms-of-service",
            LegalPage::RefundPolicy => "/refund-policy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LegalPage::PrivacyPolicy => "Privacy Policy",
            LegalPage::TermsOfService => "Terms of Service",
            LegalPage::RefundPolicy => "Refund Policy",
        }
    }

    pub fn intro(&self) -> &'static str {
        match self {
            LegalPage::PrivacyPolicy => "At DiasporaNest, your privacy is important to us. This Privacy Policy explains how we collect, use, and protect your information when you use our platform.",
            LegalPage::TermsOfService => "Welcome to DiasporaNest. By using our platform, you agree to the following terms and conditions:",
            LegalPage::RefundPolicy => "At DiasporaNest, we are committed to your satisfaction. If you are not completely satisfied with our service, you are eligible for a full refund within 7 days of your payment.",
        }
    }

    pub fn sections(&self) -> &'static [LegalSection] {
        match self {
            LegalPage::PrivacyPolicy => &PRIVACY_SECTIONS,
            LegalPage::TermsOfService => &TERMS_SECTIONS,
            LegalPage::RefundPolicy => &REFUND_SECTIONS,
        }
    }
}

const PRIVACY_SECTIONS: [LegalSection; 4] = [
    LegalSection::list("Information We Collect", &[
        "Personal information (such as name, email, and contact details) provided during registration or payment.",
        "Usage data and cookies to improve your experience.",
    ]),
    LegalSection::list("How We Use Your Information", &[
        "To provide and improve our services.",
        "To process payments and manage access.",
        "To communicate important updates and offers.",
    ]),
    LegalSection::text("Data Protection", "We implement industry-standard security measures to protect your data. We do not sell or share your personal information with third parties except as required by law."),
    LegalSection::text("Contact Us", CONTACT_US),
];

const TERMS_SECTIONS: [LegalSection; 5] = [
    LegalSection::list("Use of Service", &[
        "You must be at least 18 years old to use our services.",
        "All information provided must be accurate and up to date.",
        "Access is granted upon successful payment of the one-time fee.",
    ]),
    LegalSection::list("User Conduct", &[
        "No unauthorized sharing or resale of access.",
        "No posting of false or misleading information.",
        "Respect the privacy and rights of other users and agents.",
    ]),
    LegalSection::text("Limitation of Liability", "DiasporaNest is not liable for any losses or damages resulting from property transactions. All listings are verified to the best of our ability, but users are responsible for their own due diligence."),
    LegalSection::text("Changes to Terms", "We may update these terms from time to time. Continued use of the platform constitutes acceptance of the new terms."),
    LegalSection::text("Contact Us", CONTACT_US),
];

const REFUND_SECTIONS: [LegalSection; 3] = [
    LegalSection::list("How to Request a Refund", &[
        "Contact us at info@diasporanest.com.ng within 7 days of your payment.",
        "Provide your payment reference and the email used for payment.",
        "We will process your refund within 3-5 business days.",
    ]),
    LegalSection::text("Exceptions", "Refunds are not available after 7 days from the date of payment. For any questions, please contact our support team."),
    LegalSection::text("Contact Us", CONTACT_US),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_paths_unique() {
        let mut paths: Vec<_> = LegalPage::ALL.iter().map(LegalPage::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), LegalPage::ALL.len());
    }

    #[test]
    fn test_every_legal_page_ends_with_contact() {
        for page in LegalPage::ALL {
            let last = page.sections().last().unwrap();
            assert_eq!(last.heading, "Contact Us");
            assert!(last.paragraph.unwrap().contains(SUPPORT_EMAIL));
        }
    }

    #[test]
    fn test_testimonials_have_initials() {
        assert!(TESTIMONIALS.iter().all(|t| t.avatar.len() == 2 && t.rating <= 5));
    }
}
