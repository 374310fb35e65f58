#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub badge: &'static str,
    pub headline: &'static str,
    pub lead: &'static str,
    pub blurb: &'static str,
    pub copyright_year: u16,
    pub contacts: &'static [Contact],
    pub partners: &'static [Partner],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

impl SiteConfig {
    #[must_use]
    pub fn copyright(&self) -> String {
        format!(
            "© {} Спортивный зал {}. Все права защищены.",
            self.copyright_year, self.brand
        )
    }

    #[must_use]
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Енисей",
            badge: "Информационный портал",
            headline: "Спортивный зал",
            lead: "Современная спортивная площадка с профессиональным оборудованием. \
                   Узнайте о возможностях тренажеров и технике безопасности.",
            blurb: "Информационный ресурс спортивного зала с классификатором тренажеров и \
                    оборудования",
            copyright_year: 2024,
            contacts: &[
                Contact {
                    icon: "envelope",
                    text: "info@enisey-sport.ru",
                },
                Contact {
                    icon: "phone",
                    text: "+7 (xxx) xxx-xx-xx",
                },
                Contact {
                    icon: "location-dot",
                    text: "г. Красноярск",
                },
            ],
            partners: &[
                Partner {
                    name: "FitApp",
                    logo: "💪",
                },
                Partner {
                    name: "HealthTrack",
                    logo: "❤️",
                },
                Partner {
                    name: "SportPro",
                    logo: "🏃",
                },
                Partner {
                    name: "NutriPlan",
                    logo: "🥗",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_site_config_copyright() {
        assert_eq!(
            SiteConfig::default().copyright(),
            "© 2024 Спортивный зал Енисей. Все права защищены."
        );
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.contacts.len(), 3);
        assert_eq!(
            config.partners.iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["FitApp", "HealthTrack", "SportPro", "NutriPlan"]
        );
        assert!(!config.lead.contains("  "));
    }
}
