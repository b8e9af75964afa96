//! Static page content.
//!
//! Everything here is inert data rendered by the section components. Sections
//! are keyed by [`SectionId`], whose anchor doubles as the DOM id the
//! navigation scrolls to.

/// Page sections reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Education,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    /// Navigation order.
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::About => "Hakkımda",
            SectionId::Education => "Eğitim",
            SectionId::Experience => "Deneyim",
            SectionId::Skills => "Beceriler",
            SectionId::Contact => "İletişim",
        }
    }

    /// Heading shown at the top of the section.
    pub fn heading(self) -> &'static str {
        match self {
            SectionId::About => "Hakkımda",
            SectionId::Education => "Eğitim",
            SectionId::Experience => "Stajlar ve Projeler",
            SectionId::Skills => "Teknik Beceriler",
            SectionId::Contact => "İletişim",
        }
    }
}

/// Who the page is about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

impl Profile {
    /// Initials for the avatar, e.g. "GG".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const PROFILE: Profile = Profile {
    name: "Gizem Gündüz",
    title: "Yazılım Mühendisi",
    tagline: "Yapay zeka ve web teknolojileri konusunda uzmanlaşmış, yenilikçi çözümler üreten yazılım mühendisi",
};

pub const ABOUT: &str = "Atılım Üniversitesi Yazılım Mühendisliği bölümünden (2020-2025) mezun olmuş bir Yazılım Mühendisiyim. \
Halkbank'ta frontend geliştirme (C#, JavaScript, TypeScript) ve İstanbul Teknik Üniversitesi'nde \
yapay zeka odaklı (Python) stajlar yapmıştım. Mezuniyet projem, X-ray görüntülerinden kalp hastalıklarını \
tespit eden yapay zeka destekli bir mobil sağlık uygulamasıdır. HSM tabanlı şifreleme servisleri, \
PDF'den JPG'ye dönüştürücü geliştirdim ve LLM tabanlı yapay zeka entegrasyonuna katkıda bulundum. \
Python, JavaScript, FastAPI, Docker ve React Native teknolojilerinde deneyim sahibiyim.";

/// A degree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EducationEntry {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    school: "Atılım Üniversitesi",
    degree: "Yazılım Mühendisliği Lisans",
    period: "Eylül 2020 - Haziran 2025",
}];

/// An internship or project card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Halkbank - Frontend Stajyeri",
        period: "2024",
        highlights: &[
            "İnternet bankacılığı platformunun geliştirilmesinde görev aldım",
            "VeriBranch Framework kullanarak bankanın Döviz Kurları sayfasını tasarladım ve güncelledim",
            "Kullandığım teknolojiler: C#, SQL, TypeScript, JavaScript",
        ],
    },
    ExperienceEntry {
        title: "İstanbul Teknik Üniversitesi - Yapay Zeka Stajyeri",
        period: "2023",
        highlights: &[
            "Otonom gemi sistemlerinin temel geliştirme süreçlerine katkıda bulundum",
            "Yapay Zeka, Makine Öğrenmesi ve Derin Öğrenme konularında temel bilgi edindim",
            "Kullandığım teknoloji: Python",
        ],
    },
    ExperienceEntry {
        title: "Yapay Zeka Tabanlı Mobil Sağlık Uygulaması",
        period: "Bitirme Projesi - 2025",
        highlights: &[
            "X-ray görüntülerinden kalp hastalıklarını tespit eden mobil uygulama geliştirdim",
            "HSM servisinin tüm geliştirmesini gerçekleştirdim",
            "PDF dosyalarını JPG dosyalarına dönüştüren pdf2jpg servisini geliştirdim",
            "OpenAI tabanlı LLM entegrasyonunda takım arkadaşlarımla çalıştım",
            "React Native ile frontend geliştirdim",
            "FastAPI ve Docker kullanarak mikroservis mimarisi kurdum",
        ],
    },
];

pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "C/C++",
    "Java",
    "C#",
    "React Native",
    "Angular",
    "FastAPI",
    "Docker",
    "SQL",
    "AI/ML",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Keras",
];

/// Kind of contact line, picks the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Location,
}

impl ContactKind {
    pub fn icon(self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Location => "📍",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub value: &'static str,
}

pub const CONTACT_INFO_TITLE: &str = "İletişim Bilgileri";

pub const CONTACT: &[ContactLine] = &[
    ContactLine {
        kind: ContactKind::Email,
        value: "gizemgunduz77@gmail.com",
    },
    ContactLine {
        kind: ContactKind::Location,
        value: "Türkiye",
    },
];

/// Placeholders and labels of the contact form card. The form is not wired
/// to anything.
pub mod contact_form {
    pub const TITLE: &str = "Mesaj Gönder";
    pub const NAME_PLACEHOLDER: &str = "Adınız";
    pub const EMAIL_PLACEHOLDER: &str = "E-posta adresiniz";
    pub const MESSAGE_PLACEHOLDER: &str = "Mesajınız";
    pub const SUBMIT_LABEL: &str = "Mesaj Gönder";
}

/// Copy used by the chat widget.
pub mod chat {
    pub const TITLE: &str = "Gizem Gündüz Asistanı";
    pub const GREETING: &str = "Merhaba! Gizem Gündüz hakkında sorularınızı sorabilirsiniz.";
    pub const TYPING: &str = "Yazıyor...";
    pub const INPUT_PLACEHOLDER: &str = "Mesajınızı yazın...";
}

pub const FOOTER: &str = "© 2025 Gizem Gündüz. Tüm hakları saklıdır.";
