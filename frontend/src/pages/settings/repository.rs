#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsSection {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTIONS: [SettingsSection; 6] = [
    SettingsSection {
        icon: "fas fa-user",
        title: "Perfil",
        description: "Atualize suas informações pessoais e preferências",
    },
    SettingsSection {
        icon: "fas fa-bell",
        title: "Notificações",
        description: "Configure suas preferências de notificação",
    },
    SettingsSection {
        icon: "fas fa-lock",
        title: "Segurança",
        description: "Gerencie senha e configurações de segurança",
    },
    SettingsSection {
        icon: "fas fa-globe",
        title: "Idioma e Região",
        description: "Defina seu idioma e fuso horário",
    },
    SettingsSection {
        icon: "fas fa-credit-card",
        title: "Faturamento",
        description: "Gerencie métodos de pagamento e assinatura",
    },
    SettingsSection {
        icon: "fas fa-question-circle",
        title: "Ajuda e Suporte",
        description: "Entre em contato com nossa equipe de suporte",
    },
];
