//! Russian translations

use super::Slot;

pub(super) const fn text(slot: Slot) -> &'static str {
    match slot {
        Slot::Subscription => "Подписка",
        Slot::GetLink => "Получить ссылку",
        Slot::Expires => "Истекает через",
        Slot::Install => "Установка",
        Slot::DevicePc => "ПК",
        Slot::DevicePhone => "Телефон",
        Slot::Hiddify => "Hiddify",
        Slot::Clash => "Clash Verge",
        Slot::DownloadHiddify => "Скачайте Hiddify",
        Slot::DownloadHiddifyDesc => {
            "В главном разделе нажмите большую кнопку включения в центре для подключения к VPN. При необходимости выберите другой сервер в разделе Прокси."
        }
        Slot::DownloadClash => "Скачайте Clash Verge",
        Slot::DownloadClashDesc => "Скачайте и установите Clash Verge для вашей ОС.",
        Slot::Windows => "Windows",
        Slot::Macos => "macOS",
        Slot::Linux => "Linux",
        Slot::ServerSwitch => "Выбор/смена сервера",
        Slot::ServerSwitchDesc => {
            "После подключения, слева выберите 'Прокси' и выберите нужный сервер."
        }
        Slot::AddSub => "Добавить подписку",
        Slot::AddSubDesc => "Нажмите кнопку ниже, чтобы добавить подписку",
        Slot::AddSubBtn => "Добавить подписку",
        Slot::ImportConfig => "Импортируйте конфиг",
        Slot::ImportConfigDesc => "Импортируйте полученную ссылку в Clash Verge.",
        Slot::Ready => "Подключите и используйте",
        Slot::ReadyDesc => {
            "В главном разделе нажмите большую кнопку включения в центре для подключения к VPN. Не забудьте выбрать сервер в списке серверов. При необходимости выберите другой сервер из списка серверов."
        }
        Slot::ReadyClashDesc => {
            "В главном разделе нажмите большую кнопку включения для подключения к VPN. Не забудьте выбрать сервер в списке серверов."
        }
        Slot::Copied => "Скопировано!",
        Slot::CopyFailed => "Не удалось скопировать",
        Slot::CopyLink => "Скопировать ссылку",
    }
}
