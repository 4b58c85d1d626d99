use std::cell::RefCell;
use std::rc::Rc;

use gio::{ActionEntry, ListStore};
use gtk4::{
    prelude::*, Application, ApplicationWindow, Box as GtkBox, Button, Orientation, PolicyType,
    ScrolledWindow,
};

use crate::g_subclasses::launcher_item::LauncherItem;
use crate::loader::Loader;
use crate::panel::PanelConfig;
use crate::ui::dialogs;
use crate::ui::launcher_list::launcher_list;
use crate::utils::config::{ConfigGuard, FileDefaults};

/// Live editor state: the loaded panel document plus the row model backing
/// the view. Owned by the window; discarded with it, so closing without
/// saving drops any edits.
struct EditorState {
    panel: RefCell<PanelConfig>,
    model: ListStore,
}

impl EditorState {
    fn load() -> Self {
        let path = ConfigGuard::read()
            .map(|config| config.files.panel_config.clone())
            .unwrap_or_else(|_| FileDefaults::panel_config());
        let panel = PanelConfig::load(path);

        let model = ListStore::new::<LauncherItem>();
        for name in panel.ordered_launchers() {
            model.append(&LauncherItem::new(&name, Loader::launcher_icon(&name)));
        }
        Self {
            panel: RefCell::new(panel),
            model,
        }
    }

    /// Current row order, top to bottom. Icons are view-only and not part of
    /// what gets persisted.
    fn row_order(&self) -> Vec<String> {
        (0..self.model.n_items())
            .filter_map(|i| self.model.item(i).and_downcast::<LauncherItem>())
            .map(|entry| entry.desktop_file())
            .collect()
    }
}

pub fn window(application: &Application) -> ApplicationWindow {
    let state = Rc::new(EditorState::load());

    let window = ApplicationWindow::builder()
        .application(application)
        .title("Panel Launchers")
        .default_width(500)
        .default_height(350)
        .build();

    let (view, selection) = launcher_list(&state.model);

    let viewport = ScrolledWindow::new();
    viewport.set_hscrollbar_policy(PolicyType::Never);
    viewport.set_vexpand(true);
    viewport.set_child(Some(&view));

    let vbox = GtkBox::new(Orientation::Vertical, 6);
    vbox.set_margin_top(10);
    vbox.set_margin_bottom(10);
    vbox.set_margin_start(10);
    vbox.set_margin_end(10);
    vbox.append(&viewport);

    // Control buttons
    let button_box = GtkBox::new(Orientation::Horizontal, 6);
    button_box.set_homogeneous(true);

    let add_button = Button::with_label("Add Launcher");
    add_button.connect_clicked(|button| {
        let _ = WidgetExt::activate_action(button, "win.add-launcher", None);
    });
    button_box.append(&add_button);

    let remove_button = Button::with_label("Remove Selected");
    remove_button.connect_clicked(|button| {
        let _ = WidgetExt::activate_action(button, "win.remove-selected", None);
    });
    button_box.append(&remove_button);
    vbox.append(&button_box);

    let save_button = Button::with_label("Save Configuration");
    save_button.set_margin_top(10);
    save_button.connect_clicked(|button| {
        let _ = WidgetExt::activate_action(button, "win.save-launchers", None);
    });
    vbox.append(&save_button);

    window.set_child(Some(&vbox));

    // Setup action to pick and append a descriptor
    let action_add = ActionEntry::builder("add-launcher")
        .activate({
            let state = Rc::clone(&state);
            move |window: &ApplicationWindow, _, _| {
                let model = state.model.clone();
                dialogs::pick_desktop_file(window, move |path| {
                    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                        return;
                    };
                    if name.ends_with(".desktop") {
                        model.append(&LauncherItem::new(name, Loader::launcher_icon(name)));
                    }
                });
            }
        })
        .build();

    // Setup action to drop the selected row
    let action_remove = ActionEntry::builder("remove-selected")
        .activate({
            let state = Rc::clone(&state);
            let selection = selection.clone();
            move |_: &ApplicationWindow, _, _| {
                let index = selection.selected();
                if index != u32::MAX {
                    state.model.remove(index);
                }
            }
        })
        .build();

    // Setup action to persist the current row order
    let action_save = ActionEntry::builder("save-launchers")
        .activate({
            let state = Rc::clone(&state);
            move |window: &ApplicationWindow, _, _| {
                let mut panel = state.panel.borrow_mut();
                panel.replace_launchers(&state.row_order());
                match panel.save() {
                    Ok(()) => dialogs::confirm_save(window, panel.path()),
                    Err(error) => dialogs::report_save_failure(window, &error),
                }
            }
        })
        .build();

    window.add_action_entries([action_add, action_remove, action_save]);
    window
}
