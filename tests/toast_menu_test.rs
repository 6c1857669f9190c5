#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use spotrunner_reviews::components::dropdown_menu::DropdownMenu;
use spotrunner_reviews::components::toast::Toast;
use spotrunner_reviews::state::menu::MenuController;
use spotrunner_reviews::state::toast::ToastNotifier;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(name: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
    container.set_id(name);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn remove(container: &web_sys::HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(container).unwrap();
}

fn find(container: &web_sys::HtmlElement, selector: &str) -> web_sys::HtmlElement {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not rendered", selector))
        .unchecked_into()
}

fn mount_toasts(root: &web_sys::HtmlElement, duration_ms: u32) -> ToastNotifier {
    let slot: Rc<RefCell<Option<ToastNotifier>>> = Rc::new(RefCell::new(None));
    {
        let slot = slot.clone();
        mount_to(root.clone(), move || {
            let toasts = ToastNotifier::new(duration_ms);
            provide_context(toasts);
            slot.borrow_mut().replace(toasts);
            view! {
                <Toast id="toast-a"/>
                <Toast id="toast-b"/>
            }
        });
    }
    let toasts = slot.borrow_mut().take().expect("notifier was not created");
    toasts
}

#[wasm_bindgen_test]
async fn test_toast_show_and_auto_hide() {
    let root = container("toast-auto-hide");
    let toasts = mount_toasts(&root, 200);

    let toast = find(&root, "#toast-a");
    assert!(toast.class_list().contains("hidden"));

    toasts.show("toast-a", "Saved");
    sleep(Duration::from_millis(20)).await;
    assert!(toast.class_list().contains("flex"));
    assert!(!toast.class_list().contains("hidden"));
    assert_eq!(find(&root, "#toast-a div.ms-3").text_content().unwrap(), "Saved");

    sleep(Duration::from_millis(300)).await;
    assert!(toast.class_list().contains("hidden"));
    assert!(!toast.class_list().contains("flex"));

    remove(&root);
}

#[wasm_bindgen_test]
async fn test_toast_reshow_cancels_earlier_timer() {
    let root = container("toast-reshow");
    let toasts = mount_toasts(&root, 300);

    toasts.show("toast-a", "First");
    sleep(Duration::from_millis(200)).await;
    toasts.show("toast-a", "Second");

    // the first timer would have fired at 300ms
    sleep(Duration::from_millis(150)).await;
    assert!(toasts.is_visible("toast-a"));
    assert_eq!(toasts.message("toast-a"), "Second");

    sleep(Duration::from_millis(250)).await;
    assert!(!toasts.is_visible("toast-a"));

    remove(&root);
}

#[wasm_bindgen_test]
async fn test_toast_ids_are_independent() {
    let root = container("toast-independent");
    let toasts = mount_toasts(&root, 3000);

    toasts.show("toast-a", "one");
    toasts.show("toast-b", "two");
    toasts.hide("toast-a");
    sleep(Duration::from_millis(20)).await;

    assert!(!toasts.is_visible("toast-a"));
    assert!(toasts.is_visible("toast-b"));

    remove(&root);
}

#[wasm_bindgen_test]
async fn test_toast_unknown_id_is_noop() {
    let root = container("toast-unknown");
    let toasts = mount_toasts(&root, 3000);

    toasts.hide("does-not-exist");
    toasts.show("does-not-exist", "ignored");
    toasts.hide("toast-a"); // already hidden
    assert!(!toasts.is_visible("does-not-exist"));
    assert!(!toasts.is_visible("toast-a"));

    remove(&root);
}

fn mount_menus(root: &web_sys::HtmlElement) -> MenuController {
    let slot: Rc<RefCell<Option<MenuController>>> = Rc::new(RefCell::new(None));
    {
        let slot = slot.clone();
        mount_to(root.clone(), move || {
            let menus = MenuController::new("menu-");
            provide_context(menus);
            slot.borrow_mut().replace(menus);
            view! {
                <DropdownMenu id="menu-1" label="First">
                    <a href="#" id="item-1">{ "Edit" }</a>
                </DropdownMenu>
                <DropdownMenu id="menu-2" label="Second">
                    <a href="#" id="item-2">{ "Edit" }</a>
                </DropdownMenu>
                <p id="elsewhere">{ "Outside" }</p>
            }
        });
    }
    let menus = slot.borrow_mut().take().expect("menu controller was not created");
    menus
}

#[wasm_bindgen_test]
async fn test_menu_toggle_closes_siblings() {
    let root = container("menu-siblings");
    let menus = mount_menus(&root);

    find(&root, "[data-menu-root=\"menu-1\"] button").click();
    sleep(Duration::from_millis(20)).await;
    assert!(menus.is_open("menu-1"));
    assert!(!find(&root, "#menu-1").class_list().contains("hidden"));

    find(&root, "[data-menu-root=\"menu-2\"] button").click();
    sleep(Duration::from_millis(20)).await;
    assert!(!menus.is_open("menu-1"));
    assert!(menus.is_open("menu-2"));
    assert!(find(&root, "#menu-1").class_list().contains("hidden"));

    find(&root, "[data-menu-root=\"menu-2\"] button").click();
    sleep(Duration::from_millis(20)).await;
    assert!(!menus.is_open("menu-2"));

    remove(&root);
}

#[wasm_bindgen_test]
async fn test_menu_outside_click_closes_once() {
    let root = container("menu-outside");
    let menus = mount_menus(&root);

    menus.toggle("menu-1");
    sleep(Duration::from_millis(20)).await;

    // a click inside the menu keeps it open
    find(&root, "#item-1").click();
    sleep(Duration::from_millis(20)).await;
    assert!(menus.is_open("menu-1"));

    find(&root, "#elsewhere").click();
    sleep(Duration::from_millis(20)).await;
    assert!(!menus.is_open("menu-1"));

    // reopening installs a fresh listener
    menus.toggle("menu-1");
    sleep(Duration::from_millis(20)).await;
    find(&root, "#elsewhere").click();
    sleep(Duration::from_millis(20)).await;
    assert!(!menus.is_open("menu-1"));

    remove(&root);
}

#[wasm_bindgen_test]
async fn test_toast_reaches_page_markup() {
    let root = container("toast-page-markup");
    root.set_inner_html(
        r#"<div id="toast-page" class="hidden items-center"><div class="ms-3"></div></div>"#,
    );
    let toasts = mount_toasts(&root, 300);
    let toast = find(&root, "#toast-page");

    toasts.show("toast-page", "Review posted successfully!");
    assert!(toast.class_list().contains("flex"));
    assert!(!toast.class_list().contains("hidden"));
    assert_eq!(
        find(&root, "#toast-page div.ms-3").text_content().unwrap(),
        "Review posted successfully!"
    );

    // a second message restarts the hide delay
    sleep(Duration::from_millis(200)).await;
    toasts.show("toast-page", "Review updated successfully!");
    sleep(Duration::from_millis(150)).await;
    assert!(toast.class_list().contains("flex"));
    assert_eq!(
        find(&root, "#toast-page div.ms-3").text_content().unwrap(),
        "Review updated successfully!"
    );

    sleep(Duration::from_millis(250)).await;
    assert!(toast.class_list().contains("hidden"));
    assert!(!toast.class_list().contains("flex"));

    toasts.show("toast-page", "Again");
    toasts.hide("toast-page");
    assert!(toast.class_list().contains("hidden"));

    remove(&root);
}
