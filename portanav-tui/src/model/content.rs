//! Static portfolio content, one block per section.

/// Short label shown in the menu for a section id.
pub fn menu_label(id: &str) -> &'static str {
    match id {
        "inicio" => "Inicio",
        "especialidades" => "Especialidades",
        "servicios" => "Servicios",
        "experiencia" => "Experiencia",
        "educacion" => "Educación",
        "certificaciones" => "Certificaciones",
        "contacto" => "Contacto",
        _ => "?",
    }
}

/// Body lines rendered inside a section's panel.
pub fn section_body(id: &str) -> &'static [&'static str] {
    match id {
        "inicio" => &[
            "Luis San Martín — Ingeniero en Informática.",
            "",
            "Más de diez años de experiencia en infraestructura TI,",
            "soporte de plataformas y automatización de procesos.",
            "",
            "Este portafolio resume especialidades, servicios y",
            "trayectoria profesional. Use el menú o las teclas 1-7.",
        ],
        "especialidades" => &[
            "• Administración de servidores Linux y Windows.",
            "• Virtualización y contenedores.",
            "• Redes, DNS y seguridad perimetral.",
            "• Scripting y automatización (Bash, PowerShell).",
            "• Monitoreo y respaldo de plataformas.",
        ],
        "servicios" => &[
            "• Consultoría de infraestructura TI.",
            "• Migración y puesta en marcha de servicios.",
            "• Soporte remoto y en terreno.",
            "• Auditoría de seguridad básica.",
        ],
        "experiencia" => &[
            "2021 — hoy   Analista de plataformas, área TI corporativa.",
            "2017 — 2021  Administrador de sistemas, servicios gestionados.",
            "2013 — 2017  Soporte técnico de nivel 2.",
        ],
        "educacion" => &[
            "Ingeniería en Informática.",
            "Diplomado en administración de proyectos TI.",
        ],
        "certificaciones" => &[
            "• Linux Professional Institute LPIC-1.",
            "• Microsoft Certified: Azure Fundamentals.",
            "• ITIL 4 Foundation.",
        ],
        "contacto" => &[
            "Correo: contacto@luissanmartin.example",
            "LinkedIn: /in/luis-san-martin",
            "",
            "Disponible para proyectos y consultorías.",
        ],
        _ => &[],
    }
}
