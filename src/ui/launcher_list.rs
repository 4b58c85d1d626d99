use gio::ListStore;
use gtk4::gdk::{ContentProvider, DragAction};
use gtk4::{
    prelude::*, Box as GtkBox, DragSource, DropTarget, Image, Label, ListView, Orientation,
    SignalListItemFactory, SingleSelection,
};

use crate::g_subclasses::launcher_item::LauncherItem;
use crate::prelude::IconComp;
use crate::utils::config::ConfigGuard;

/// Builds the reorderable (icon, name) list over the given model. The
/// returned selection is what Remove acts on.
pub fn launcher_list(model: &ListStore) -> (ListView, SingleSelection) {
    let selection = SingleSelection::new(Some(model.clone()));
    selection.set_autoselect(false);
    selection.set_can_unselect(true);

    let view = ListView::new(Some(selection.clone()), Some(make_factory(model)));
    view.set_vexpand(true);
    (view, selection)
}

fn make_factory(model: &ListStore) -> SignalListItemFactory {
    let factory = SignalListItemFactory::new();
    factory.connect_setup({
        let model = model.clone();
        move |_, item| {
            let item = item
                .downcast_ref::<gtk4::ListItem>()
                .expect("Item must be a ListItem");

            let row = GtkBox::new(Orientation::Horizontal, 10);
            let icon = Image::new();
            if let Ok(config) = ConfigGuard::read() {
                icon.set_pixel_size(config.appearance.icon_size);
            }
            let name = Label::new(None);
            name.set_xalign(0.0);
            row.append(&icon);
            row.append(&name);

            attach_reorder_controllers(&row, &model, item);
            item.set_child(Some(&row));
        }
    });
    factory.connect_bind(|_, item| {
        let item = item
            .downcast_ref::<gtk4::ListItem>()
            .expect("Item must be a ListItem");
        let row = item
            .child()
            .and_downcast::<GtkBox>()
            .expect("Child must be a Box");
        let entry = item
            .item()
            .and_downcast::<LauncherItem>()
            .expect("Row should be a LauncherItem");

        if let Some(icon) = row.first_child().and_downcast::<Image>() {
            icon.set_launcher_icon(entry.icon().as_ref());
        }
        if let Some(name) = row.last_child().and_downcast::<Label>() {
            name.set_text(&entry.desktop_file());
        }
    });
    factory
}

/// Row drag-and-drop is the only way to change relative order. The drag
/// carries the `LauncherItem` itself; the drop slot is read off the target
/// row's list item at drop time, so recycled rows stay correct.
fn attach_reorder_controllers(row: &GtkBox, model: &ListStore, item: &gtk4::ListItem) {
    let drag_source = DragSource::new();
    drag_source.set_actions(DragAction::MOVE);
    drag_source.connect_prepare({
        let item = item.downgrade();
        move |_, _, _| {
            let entry = item.upgrade()?.item().and_downcast::<LauncherItem>()?;
            Some(ContentProvider::for_value(&entry.to_value()))
        }
    });
    row.add_controller(drag_source);

    let drop_target = DropTarget::new(LauncherItem::static_type(), DragAction::MOVE);
    drop_target.connect_drop({
        let model = model.clone();
        let item = item.downgrade();
        move |_, value, _, _| {
            let Ok(dragged) = value.get::<LauncherItem>() else {
                return false;
            };
            let Some(target) = item
                .upgrade()
                .and_then(|item| item.item())
                .and_downcast::<LauncherItem>()
            else {
                return false;
            };
            move_entry(&model, &dragged, &target)
        }
    });
    row.add_controller(drop_target);
}

/// Moves `dragged` into the slot currently occupied by `target`.
fn move_entry(model: &ListStore, dragged: &LauncherItem, target: &LauncherItem) -> bool {
    if dragged == target {
        return false;
    }
    let (Some(from), Some(to)) = (model.find(dragged), model.find(target)) else {
        return false;
    };
    model.remove(from);
    model.insert(to, dragged);
    true
}
