fn main() {
    sleepy_dashboard::mount();
}
