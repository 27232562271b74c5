//! English translations

use super::Slot;

pub(super) const fn text(slot: Slot) -> &'static str {
    match slot {
        Slot::Subscription => "Subscription",
        Slot::GetLink => "Get Link",
        Slot::Expires => "Expires in",
        Slot::Install => "Setup",
        Slot::DevicePc => "PC",
        Slot::DevicePhone => "Phone",
        Slot::Hiddify => "Hiddify",
        Slot::Clash => "Clash Verge",
        Slot::DownloadHiddify => "Download Hiddify",
        Slot::DownloadHiddifyDesc => {
            "In the main section, press the big power button in the center to connect to VPN. If needed, select another server in the Proxy section."
        }
        Slot::DownloadClash => "Download Clash Verge",
        Slot::DownloadClashDesc => "Download and install Clash Verge for your OS.",
        Slot::Windows => "Windows",
        Slot::Macos => "macOS",
        Slot::Linux => "Linux",
        Slot::ServerSwitch => "Server selection/switch",
        Slot::ServerSwitchDesc => {
            "After connecting, select 'Proxy' on the left and choose the desired server."
        }
        Slot::AddSub => "Add subscription",
        Slot::AddSubDesc => "Click the button below to add a subscription",
        Slot::AddSubBtn => "Add subscription",
        Slot::ImportConfig => "Import config",
        Slot::ImportConfigDesc => "Import the received link into Clash Verge.",
        Slot::Ready => "Connect and use",
        Slot::ReadyDesc => {
            "In the main section, press the big power button in the center to connect to VPN. Don't forget to select a server from the server list. If needed, select another server from the list."
        }
        Slot::ReadyClashDesc => {
            "In the main section, press the big power button to connect to VPN. Don't forget to select a server from the server list."
        }
        Slot::Copied => "Copied!",
        Slot::CopyFailed => "Copy failed",
        Slot::CopyLink => "Copy link",
    }
}
