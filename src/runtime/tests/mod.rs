mod dispatcher;
